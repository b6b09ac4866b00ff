//! Reference and search lookups.
//!
//! Every reference and the search run as independent tasks. Each task prints
//! its block as soon as its provider call completes, so the order of blocks
//! across lookups follows completion order, not argument order.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinSet;
use tracing::{debug, warn};
use verse_core::{
    BlockHeader, EffectiveOptions, ProviderResult, RenderSummary, Renderer, SearchPattern, TableStyle,
    VerseProvider,
};

/// Everything a lookup task needs, shared across tasks.
pub struct LookupContext {
    pub provider: Arc<dyn VerseProvider>,
    pub options: EffectiveOptions,
    pub style: TableStyle,
    /// Active search; also highlights matches inside reference lookups.
    pub search: Option<SearchPattern>,
}

/// One unit of work dispatched to the provider.
#[derive(Debug, Clone)]
enum Lookup {
    Reference(String),
    Search,
}

/// Run all lookups and wait for every one to print.
///
/// Provider failures are printed inline and do not fail the run.
pub async fn execute(ctx: LookupContext, references: Vec<String>) -> Result<Vec<RenderSummary>> {
    let ctx = Arc::new(ctx);
    let mut tasks = JoinSet::new();

    let mut lookups: Vec<Lookup> = references.into_iter().map(Lookup::Reference).collect();
    if ctx.search.is_some() {
        lookups.push(Lookup::Search);
    }

    for lookup in lookups {
        let ctx = Arc::clone(&ctx);
        tasks.spawn(async move { run_lookup(&ctx, lookup).await });
    }

    let mut summaries = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        summaries.push(joined??);
    }
    Ok(summaries)
}

async fn run_lookup(ctx: &LookupContext, lookup: Lookup) -> io::Result<RenderSummary> {
    let outcome = match &lookup {
        Lookup::Reference(reference) => ctx.provider.get(reference).await,
        Lookup::Search => match &ctx.search {
            Some(pattern) => ctx.provider.search(pattern).await,
            None => Ok(Vec::new()),
        },
    };
    if let Err(err) = &outcome {
        warn!("lookup {lookup:?} failed: {err}");
    }

    let header = match (&lookup, &ctx.search) {
        (Lookup::Reference(reference), _) => Some(BlockHeader::Reference(reference)),
        (Lookup::Search, Some(pattern)) => Some(BlockHeader::Search(pattern)),
        (Lookup::Search, None) => None,
    };

    let summary = print_block(ctx, header, outcome)?;
    debug!("lookup {lookup:?} finished: {summary:?}");
    Ok(summary)
}

fn print_block(
    ctx: &LookupContext,
    header: Option<BlockHeader<'_>>,
    outcome: ProviderResult,
) -> io::Result<RenderSummary> {
    let renderer = Renderer::new(&ctx.options, &ctx.style);
    let mut handle = io::stdout().lock();
    renderer.write_block(&mut handle, header, outcome, ctx.search.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::num::NonZeroUsize;
    use verse_core::{ProviderError, RenderState, Rgb, VerseRecord};

    /// Canned records; `Broken 1:1` fails like a network error.
    struct StaticProvider(Vec<VerseRecord>);

    #[async_trait]
    impl VerseProvider for StaticProvider {
        async fn get(&self, reference: &str) -> ProviderResult {
            if reference == "Broken 1:1" {
                Err(ProviderError::Other("network".to_string()))
            } else {
                Ok(self.0.clone())
            }
        }

        async fn search(&self, pattern: &SearchPattern) -> ProviderResult {
            Ok(self
                .0
                .iter()
                .filter(|record| pattern.is_match(&record.text))
                .cloned()
                .collect())
        }
    }

    fn context(search: Option<&str>, limit: usize) -> LookupContext {
        let records = (1..=5)
            .map(|n| VerseRecord::new("Psalms", 23, n, format!("The Lord verse {n}")))
            .collect();
        LookupContext {
            provider: Arc::new(StaticProvider(records)),
            options: EffectiveOptions {
                language: "en".to_string(),
                result_color: Rgb::RED,
                search_limit: NonZeroUsize::new(limit).unwrap(),
                only_verses: true,
            },
            style: TableStyle::default(),
            search: search.map(|s| SearchPattern::parse(s).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_each_lookup_is_rendered_independently() {
        let summaries = execute(
            context(None, 10),
            vec!["Psalms 23".to_string(), "Broken 1:1".to_string()],
        )
        .await
        .unwrap();

        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().any(|s| s.state == RenderState::Error));
        assert!(
            summaries
                .iter()
                .any(|s| s.state == RenderState::Flushed && s.rendered == 5)
        );
    }

    #[tokio::test]
    async fn test_search_is_capped_per_lookup() {
        let summaries = execute(context(Some("Lord"), 2), Vec::new()).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].rendered, 2);
    }

    #[tokio::test]
    async fn test_reference_lookups_are_not_capped_without_search() {
        let summaries = execute(context(None, 2), vec!["Psalms 23".to_string()])
            .await
            .unwrap();
        assert_eq!(summaries[0].rendered, 5);
    }

    #[tokio::test]
    async fn test_nothing_to_do_renders_nothing() {
        let summaries = execute(context(None, 10), Vec::new()).await.unwrap();
        assert!(summaries.is_empty());
    }
}

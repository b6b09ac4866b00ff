//! Verse providers.
//!
//! The rendering pipeline only sees the [`VerseProvider`] trait. The one
//! implementation shipped here, [`LocalProvider`], serves translation packs
//! already installed on disk: one JSON array of verse records per language at
//! `<data_dir>/<language>.json`.
//!
//! ```json
//! [
//!   {"bookname": "John", "chapter": 3, "verse": 16, "text": "For God so loved the world"}
//! ]
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::{Error, ProviderError, Reference, Result, SearchPattern, VerseRecord};

/// Environment variable overriding the pack directory.
pub const DATA_DIR_ENV: &str = "VERSE_DATA_DIR";

/// Result of one provider lookup.
pub type ProviderResult = std::result::Result<Vec<VerseRecord>, ProviderError>;

/// A source of verse records.
///
/// Record order is provider-defined and preserved by the output controller.
#[async_trait]
pub trait VerseProvider: Send + Sync {
    /// Resolve a reference string to the verses it names.
    async fn get(&self, reference: &str) -> ProviderResult;

    /// Every verse whose text matches `pattern`.
    async fn search(&self, pattern: &SearchPattern) -> ProviderResult;
}

/// Serves verses from a JSON translation pack on the local filesystem.
///
/// The pack is read on first use and shared by all later lookups.
#[derive(Debug)]
pub struct LocalProvider {
    language: String,
    data_dir: PathBuf,
    pack: OnceCell<std::result::Result<Vec<VerseRecord>, ProviderError>>,
}

impl LocalProvider {
    /// A provider for `language` reading packs from `data_dir`.
    pub fn new(language: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            language: language.into(),
            data_dir: data_dir.into(),
            pack: OnceCell::new(),
        }
    }

    /// Resolve the pack directory: `VERSE_DATA_DIR`, else `~/.verse`.
    pub fn default_data_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let home = directories::BaseDirs::new()
            .ok_or_else(|| Error::Config("Failed to determine home directory".into()))?;
        Ok(home.home_dir().join(".verse"))
    }

    /// Location of this provider's pack file.
    pub fn pack_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.language))
    }

    /// Directory the pack is read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn records(&self) -> std::result::Result<&[VerseRecord], ProviderError> {
        let loaded = self.pack.get_or_init(|| self.load_pack()).await;
        match loaded {
            Ok(records) => Ok(records.as_slice()),
            Err(err) => Err(err.clone()),
        }
    }

    async fn load_pack(&self) -> std::result::Result<Vec<VerseRecord>, ProviderError> {
        if !tokio::fs::try_exists(&self.data_dir).await.unwrap_or(false) {
            warn!(
                "{} directory was not found. Install a translation pack there to look up verses.",
                self.data_dir.display()
            );
        }

        let path = self.pack_path();
        let not_available = |reason: String| ProviderError::NotAvailable {
            language: self.language.clone(),
            reason,
        };

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| not_available(format!("cannot read {}: {e}", path.display())))?;
        let records: Vec<VerseRecord> = serde_json::from_slice(&bytes)
            .map_err(|e| not_available(format!("malformed pack {}: {e}", path.display())))?;

        debug!("loaded {} verses from {}", records.len(), path.display());
        Ok(records)
    }
}

#[async_trait]
impl VerseProvider for LocalProvider {
    async fn get(&self, reference: &str) -> ProviderResult {
        let parsed = Reference::parse(reference)
            .map_err(|_| ProviderError::InvalidReference(reference.trim().to_string()))?;
        let records = self.records().await?;
        Ok(records
            .iter()
            .filter(|record| parsed.contains(record))
            .cloned()
            .collect())
    }

    async fn search(&self, pattern: &SearchPattern) -> ProviderResult {
        let records = self.records().await?;
        Ok(records
            .iter()
            .filter(|record| pattern.is_match(&record.text))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_pack(dir: &Path, language: &str) {
        let records = vec![
            VerseRecord::new("John", 3, 16, "For God so loved the world"),
            VerseRecord::new("John", 3, 17, "For God sent not his Son into the world"),
            VerseRecord::new("John", 3, 18, "He that believeth on him is not condemned"),
            VerseRecord::new("Genesis", 1, 1, "In the beginning God created the heaven and the earth."),
        ];
        let json = serde_json::to_string(&records).unwrap();
        std::fs::write(dir.join(format!("{language}.json")), json).unwrap();
    }

    #[tokio::test]
    async fn test_get_returns_range_in_pack_order() {
        let dir = TempDir::new().unwrap();
        write_pack(dir.path(), "en");
        let provider = LocalProvider::new("en", dir.path());

        let verses = provider.get("John 3:16-17").await.unwrap();
        let labels: Vec<_> = verses.iter().map(VerseRecord::reference_label).collect();
        assert_eq!(labels, vec!["John 3:16", "John 3:17"]);
    }

    #[tokio::test]
    async fn test_get_unknown_reference_is_empty() {
        let dir = TempDir::new().unwrap();
        write_pack(dir.path(), "en");
        let provider = LocalProvider::new("en", dir.path());

        assert!(provider.get("Jude 1:1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_rejects_unparsable_reference() {
        let dir = TempDir::new().unwrap();
        write_pack(dir.path(), "en");
        let provider = LocalProvider::new("en", dir.path());

        let err = provider.get("John").await.unwrap_err();
        assert_eq!(err, ProviderError::InvalidReference("John".to_string()));
    }

    #[tokio::test]
    async fn test_search_filters_by_pattern() {
        let dir = TempDir::new().unwrap();
        write_pack(dir.path(), "en");
        let provider = LocalProvider::new("en", dir.path());

        let pattern = SearchPattern::parse("God").unwrap();
        let verses = provider.search(&pattern).await.unwrap();
        assert_eq!(verses.len(), 3);
        assert_eq!(verses[2].book_name, "Genesis");
    }

    #[tokio::test]
    async fn test_missing_pack_is_reported_for_every_lookup() {
        let dir = TempDir::new().unwrap();
        let provider = LocalProvider::new("xx", dir.path());

        let first = provider.get("John 3:16").await.unwrap_err();
        let second = provider.get("John 3:17").await.unwrap_err();
        assert!(matches!(first, ProviderError::NotAvailable { ref language, .. } if language == "xx"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_pack_is_not_available() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("en.json"), "{not json").unwrap();
        let provider = LocalProvider::new("en", dir.path());

        let err = provider.search(&SearchPattern::parse("God").unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("malformed pack"));
    }
}

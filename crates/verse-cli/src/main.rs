//! verse CLI entry point.

use std::process::ExitCode;

use verse_cli::error::category_from_error;

#[tokio::main]
async fn main() -> ExitCode {
    match verse_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            category_from_error(&err).as_exit_code()
        },
    }
}

use casino_core::deck::DeckError;
use casino_core::json::JsonError;
use std::process::ExitCode;

pub mod logging;

#[derive(Debug, derive_more::Display)]
pub enum CliError {
    Json(JsonError),
    Deck(DeckError),
}

impl std::error::Error for CliError {}

impl From<JsonError> for CliError {
    fn from(e: JsonError) -> Self {
        CliError::Json(e)
    }
}

impl From<DeckError> for CliError {
    fn from(e: DeckError) -> Self {
        CliError::Deck(e)
    }
}

/// Turn the outcome of a run into the process exit status, printing a one-line diagnostic on
/// failure.
pub fn finish(res: Result<(), CliError>) -> ExitCode {
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

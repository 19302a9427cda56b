use thiserror::Error;

/// Failures a pipeline run can end in. None of them is fatal to the server;
/// each one is turned into a display value by the presentation adapter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("retrieval error: {0}")]
    Retrieval(String),

    #[error("summarization error: {0}")]
    Summarization(String),

    #[error("synthesis error: {0}")]
    Synthesis(String),
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// Flattens an error chain into a single line for display.
pub(crate) fn describe(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

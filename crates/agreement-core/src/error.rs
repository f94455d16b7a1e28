//! Failures that end a generation in the Failed state
//!
//! Validation problems are not errors; they travel as message lists in
//! `ValidationResult`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgreementError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Missing {0} after validation")]
    MissingInput(&'static str),

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Document compilation failed: {0}")]
    CompileFailed(String),

    #[error("Renderer produced no document")]
    EmptyArtifact,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<typst_engine::compiler::ServerError> for AgreementError {
    fn from(err: typst_engine::compiler::ServerError) -> Self {
        use typst_engine::compiler::ServerError;
        match err {
            ServerError::CompileError(errors) => AgreementError::CompileFailed(
                errors
                    .iter()
                    .map(|e| e.message.clone())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            other => AgreementError::Render(other.to_string()),
        }
    }
}

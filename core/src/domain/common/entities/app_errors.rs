use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    /// Network failure or timeout while talking to an external service.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The generation API answered with a non-2xx status.
    #[error("Upstream error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// Response body missing, not JSON, or not matching the recipe schema.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Recipe generation already in progress")]
    GenerationInFlight,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Errors that send the recipe pipeline to its fallback path.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            CoreError::Transport(_) | CoreError::Upstream { .. } | CoreError::MalformedResponse(_)
        )
    }
}

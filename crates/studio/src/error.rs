use signalforge_core::error::{CoreError, GenerationError};

/// Errors surfaced by studio operations.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// A domain-level error (unknown design, re-entrant generate).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The image capability failed and the whole attempt was aborted.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

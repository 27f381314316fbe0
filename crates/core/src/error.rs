use crate::types::DesignId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DesignId },

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Failure of the external image capability.
///
/// There is no fallback image, so this error aborts the whole generation
/// attempt. Specification failures never reach this type; they are absorbed
/// at the client with [`crate::spec_sheet::SpecificationSheet::fallback`].
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Image generation failed: {0}")]
    ImageUnavailable(String),
}

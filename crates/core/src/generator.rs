//! Seam between the orchestrator and the external generation service.

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::params::GenerationParameters;
use crate::spec_sheet::SpecificationSheet;

/// The two capabilities consumed from the external generative service.
///
/// The signatures encode the failure contract: an image failure is fatal
/// to a generation attempt, while specification text is always
/// substitutable -- implementors must absorb any upstream failure into
/// [`SpecificationSheet::fallback`] rather than surface it.
#[async_trait]
pub trait ConceptGenerator: Send + Sync {
    /// Produce a displayable reference to a concept image for `params`.
    async fn concept_image(
        &self,
        params: &GenerationParameters,
    ) -> Result<String, GenerationError>;

    /// Produce the specification sheet for `params`. Infallible by
    /// contract; a degraded outcome is already the fallback sheet.
    async fn specification_sheet(&self, params: &GenerationParameters) -> SpecificationSheet;
}

//! Archived generation outcomes.

use serde::{Deserialize, Serialize};

use crate::params::GenerationParameters;
use crate::spec_sheet::SpecificationSheet;
use crate::types::{DesignId, Timestamp};

/// One finished generation attempt: image reference, parameters, and the
/// specification sheet that was paired with it.
///
/// Assembled exactly once, after both generation calls have settled, and
/// never mutated afterwards. The archive holds these as plain values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub id: DesignId,
    pub created_at: Timestamp,
    /// Displayable reference to the concept image (a PNG data URI).
    pub image_ref: String,
    pub params: GenerationParameters,
    pub spec: SpecificationSheet,
    /// The detail text that went into the image prompt, recorded verbatim
    /// (empty when the user supplied none).
    pub prompt_detail_used: String,
}

impl GenerationResult {
    /// Assemble a result from a finished attempt, stamping a fresh v7 id
    /// and the current time.
    pub fn assemble(
        image_ref: String,
        params: GenerationParameters,
        spec: SpecificationSheet,
    ) -> Self {
        let prompt_detail_used = params.detail_text.clone();
        Self {
            id: uuid::Uuid::now_v7(),
            created_at: chrono::Utc::now(),
            image_ref,
            params,
            spec,
            prompt_detail_used,
        }
    }

    /// Deterministic filename for exporting this design's render.
    pub fn export_filename(&self) -> String {
        format!("signal-booster-{}.png", self.id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DesignStyle, DeviceCategory, Material};

    fn params(detail: &str) -> GenerationParameters {
        GenerationParameters {
            device_category: DeviceCategory::HomeOffice,
            material: Material::GlossWhitePlastic,
            style: DesignStyle::Minimalist,
            detail_text: detail.to_string(),
        }
    }

    #[test]
    fn assemble_records_detail_text_verbatim() {
        let design = GenerationResult::assemble(
            "data:image/png;base64,AA==".to_string(),
            params("内置风扇"),
            SpecificationSheet::fallback(),
        );
        assert_eq!(design.prompt_detail_used, "内置风扇");

        let design = GenerationResult::assemble(
            "data:image/png;base64,AA==".to_string(),
            params(""),
            SpecificationSheet::fallback(),
        );
        assert_eq!(design.prompt_detail_used, "");
    }

    #[test]
    fn assembled_ids_are_distinct() {
        let a = GenerationResult::assemble(
            "data:image/png;base64,AA==".to_string(),
            params(""),
            SpecificationSheet::fallback(),
        );
        let b = GenerationResult::assemble(
            "data:image/png;base64,AA==".to_string(),
            params(""),
            SpecificationSheet::fallback(),
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn export_filename_is_derived_from_the_id() {
        let design = GenerationResult::assemble(
            "data:image/png;base64,AA==".to_string(),
            params(""),
            SpecificationSheet::fallback(),
        );
        assert_eq!(
            design.export_filename(),
            format!("signal-booster-{}.png", design.id)
        );
    }
}

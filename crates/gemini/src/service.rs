//! Domain-facing generation service backed by the Gemini API.
//!
//! Implements [`ConceptGenerator`] with the asymmetric failure contract:
//! a failed or empty image reply aborts with
//! [`GenerationError::ImageUnavailable`], while any specification problem
//! (transport error, empty reply, malformed JSON) is logged and replaced
//! by the fixed fallback sheet.

use async_trait::async_trait;

use signalforge_core::error::GenerationError;
use signalforge_core::generator::ConceptGenerator;
use signalforge_core::image_ref;
use signalforge_core::params::GenerationParameters;
use signalforge_core::prompt;
use signalforge_core::spec_sheet::SpecificationSheet;

use crate::api::GeminiApi;
use crate::config::GeminiConfig;
use crate::messages::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
};

/// [`ConceptGenerator`] implementation talking to the Gemini
/// `generateContent` API with one model per capability.
pub struct GeminiGenerator {
    api: GeminiApi,
    image_model: String,
    text_model: String,
}

impl GeminiGenerator {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            api: GeminiApi::new(config),
            image_model: config.image_model.clone(),
            text_model: config.text_model.clone(),
        }
    }
}

#[async_trait]
impl ConceptGenerator for GeminiGenerator {
    async fn concept_image(
        &self,
        params: &GenerationParameters,
    ) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content::from_text(prompt::image_prompt(params))],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: prompt::IMAGE_ASPECT_RATIO.to_string(),
                }),
                ..Default::default()
            }),
        };

        let response = self
            .api
            .generate_content(&self.image_model, &request)
            .await
            .map_err(|e| GenerationError::ImageUnavailable(e.to_string()))?;

        match response.first_inline_data() {
            Some(inline) => Ok(image_ref::png_data_uri(&inline.data)),
            None => Err(GenerationError::ImageUnavailable(
                "Gemini returned no image payload".to_string(),
            )),
        }
    }

    async fn specification_sheet(&self, params: &GenerationParameters) -> SpecificationSheet {
        let request = GenerateContentRequest {
            contents: vec![Content::from_text(prompt::spec_instruction(params))],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(sheet_response_schema()),
                ..Default::default()
            }),
        };

        match self.api.generate_content(&self.text_model, &request).await {
            Ok(response) => match parse_sheet(&response) {
                Ok(sheet) => sheet,
                Err(reason) => {
                    tracing::warn!(
                        model = %self.text_model,
                        %reason,
                        "Specification reply unusable, substituting fallback sheet",
                    );
                    SpecificationSheet::fallback()
                }
            },
            Err(e) => {
                tracing::warn!(
                    model = %self.text_model,
                    error = %e,
                    "Specification request failed, substituting fallback sheet",
                );
                SpecificationSheet::fallback()
            }
        }
    }
}

/// JSON schema constraining the sheet reply to exactly the seven required
/// string fields.
fn sheet_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "dimensions": { "type": "STRING", "description": "长x宽x高 (mm)" },
            "coolingSolution": { "type": "STRING", "description": "散热管理描述 (例如：被动式铝制散热鳍片)" },
            "ipRating": { "type": "STRING", "description": "IP防护等级 (例如：IP65, IP54)" },
            "materialComposition": { "type": "STRING", "description": "详细材质成分" },
            "connectorType": { "type": "STRING", "description": "射频接口类型 (例如：N-Female, SMA)" },
            "estimatedWeight": { "type": "STRING", "description": "重量 (kg 或 g)" },
            "marketingTagline": { "type": "STRING", "description": "简短有力的营销口号" }
        },
        "required": [
            "dimensions",
            "coolingSolution",
            "ipRating",
            "materialComposition",
            "connectorType",
            "estimatedWeight",
            "marketingTagline"
        ]
    })
}

/// Parse the structured JSON text reply into a sheet, or explain why it
/// cannot be used.
fn parse_sheet(response: &GenerateContentResponse) -> Result<SpecificationSheet, String> {
    let text = response
        .first_text()
        .ok_or_else(|| "no text part in response".to_string())?;
    serde_json::from_str(text).map_err(|e| format!("malformed sheet JSON: {e}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn text_response(text: &str) -> GenerateContentResponse {
        serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
        .unwrap()
    }

    #[test]
    fn well_formed_reply_parses_into_a_sheet() {
        let response = text_response(
            r#"{
                "dimensions": "300mm x 200mm x 60mm",
                "coolingSolution": "外露式散热鳍片",
                "ipRating": "IP67",
                "materialComposition": "压铸铝",
                "connectorType": "N-Female",
                "estimatedWeight": "2.4kg",
                "marketingTagline": "山野之间，信号不断。"
            }"#,
        );

        let sheet = parse_sheet(&response).unwrap();
        assert_eq!(sheet.ip_rating, "IP67");
        assert_eq!(sheet.estimated_weight, "2.4kg");
    }

    #[test]
    fn reply_missing_a_required_field_is_rejected() {
        // ipRating absent: the caller substitutes the fallback sheet.
        let response = text_response(
            r#"{
                "dimensions": "300mm x 200mm x 60mm",
                "coolingSolution": "外露式散热鳍片",
                "materialComposition": "压铸铝",
                "connectorType": "N-Female",
                "estimatedWeight": "2.4kg",
                "marketingTagline": "山野之间，信号不断。"
            }"#,
        );

        let reason = parse_sheet(&response).unwrap_err();
        assert!(reason.contains("malformed sheet JSON"));
    }

    #[test]
    fn reply_without_text_is_rejected() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
        let reason = parse_sheet(&response).unwrap_err();
        assert_eq!(reason, "no text part in response");
    }

    #[test]
    fn schema_requires_all_seven_fields() {
        let schema = sheet_response_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 7);
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 7);
        for field in required {
            assert!(properties.contains_key(field.as_str().unwrap()));
        }
    }
}

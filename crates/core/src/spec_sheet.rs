//! The seven-field specification sheet attached to every archived design.

use serde::{Deserialize, Serialize};

/// Structured technical attributes of a generated concept.
///
/// Every field is human-readable free text produced by the text model (or
/// by [`fallback`](Self::fallback)); nothing downstream parses numbers or
/// validates units. Produced once per generation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationSheet {
    /// L x W x H, e.g. "200mm x 150mm x 40mm".
    pub dimensions: String,
    pub cooling_solution: String,
    /// Ingress protection rating, e.g. "IP54".
    pub ip_rating: String,
    pub material_composition: String,
    /// RF connector type, e.g. "N-Female".
    pub connector_type: String,
    pub estimated_weight: String,
    pub marketing_tagline: String,
}

impl SpecificationSheet {
    /// Fixed placeholder sheet substituted when the text model fails or
    /// replies with something that does not match the expected shape.
    /// Substituting a full sheet keeps every archived design fully
    /// populated.
    pub fn fallback() -> Self {
        Self {
            dimensions: "200mm x 150mm x 40mm".to_string(),
            cooling_solution: "被动式铝合金散热阵列".to_string(),
            ip_rating: "IP54".to_string(),
            material_composition: "6063 航空级铝合金".to_string(),
            connector_type: "N型母头 (N-Female)".to_string(),
            estimated_weight: "1.2kg".to_string(),
            marketing_tagline: "信号无死角，连接更自由。".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_populates_every_field() {
        let sheet = SpecificationSheet::fallback();
        assert!(!sheet.dimensions.is_empty());
        assert!(!sheet.cooling_solution.is_empty());
        assert_eq!(sheet.ip_rating, "IP54");
        assert!(!sheet.material_composition.is_empty());
        assert!(!sheet.connector_type.is_empty());
        assert!(!sheet.estimated_weight.is_empty());
        assert!(!sheet.marketing_tagline.is_empty());
    }

    #[test]
    fn sheet_parses_from_camel_case_model_reply() {
        let sheet: SpecificationSheet = serde_json::from_str(
            r#"{
                "dimensions": "120mm x 80mm x 30mm",
                "coolingSolution": "被动式散热",
                "ipRating": "IP65",
                "materialComposition": "聚碳酸酯",
                "connectorType": "SMA",
                "estimatedWeight": "450g",
                "marketingTagline": "小身材，大信号。"
            }"#,
        )
        .unwrap();
        assert_eq!(sheet.ip_rating, "IP65");
        assert_eq!(sheet.connector_type, "SMA");
    }

    #[test]
    fn sheet_with_missing_field_is_rejected() {
        // No ipRating: must fail to parse so the fallback policy kicks in.
        let result: Result<SpecificationSheet, _> = serde_json::from_str(
            r#"{
                "dimensions": "120mm x 80mm x 30mm",
                "coolingSolution": "被动式散热",
                "materialComposition": "聚碳酸酯",
                "connectorType": "SMA",
                "estimatedWeight": "450g",
                "marketingTagline": "小身材，大信号。"
            }"#,
        );
        assert!(result.is_err());
    }
}

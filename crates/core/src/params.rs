//! User-selectable design parameters.
//!
//! Each parameter is a closed enumeration whose wire value is the product
//! label shown in the studio UI. Deserialization rejects anything outside
//! the closed set, so parameters are validated at the API boundary and the
//! rest of the system only ever sees known values.

use serde::{Deserialize, Serialize};

/// Device class of the signal booster being designed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceCategory {
    #[serde(rename = "家用/办公桌面型")]
    HomeOffice,
    #[serde(rename = "车载/房车移动型")]
    VehicleRv,
    #[serde(rename = "工业级机架/壁挂式")]
    IndustrialRack,
    #[serde(rename = "户外抱杆式中继器")]
    OutdoorPole,
}

impl DeviceCategory {
    /// All selectable categories, in presentation order.
    pub const ALL: [DeviceCategory; 4] = [
        DeviceCategory::HomeOffice,
        DeviceCategory::VehicleRv,
        DeviceCategory::IndustrialRack,
        DeviceCategory::OutdoorPole,
    ];

    /// Product label used in prompts and on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceCategory::HomeOffice => "家用/办公桌面型",
            DeviceCategory::VehicleRv => "车载/房车移动型",
            DeviceCategory::IndustrialRack => "工业级机架/壁挂式",
            DeviceCategory::OutdoorPole => "户外抱杆式中继器",
        }
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Enclosure material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "拉丝铝合金")]
    BrushedAluminum,
    #[serde(rename = "黑色阳极氧化铝")]
    AnodizedBlackAluminum,
    #[serde(rename = "高强度聚碳酸酯")]
    Polycarbonate,
    #[serde(rename = "带橡胶缓冲的军工复合材料")]
    RuggedComposite,
    #[serde(rename = "高光白色消费级塑料")]
    GlossWhitePlastic,
}

impl Material {
    /// All selectable materials, in presentation order.
    pub const ALL: [Material; 5] = [
        Material::BrushedAluminum,
        Material::AnodizedBlackAluminum,
        Material::Polycarbonate,
        Material::RuggedComposite,
        Material::GlossWhitePlastic,
    ];

    /// Product label used in prompts and on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Material::BrushedAluminum => "拉丝铝合金",
            Material::AnodizedBlackAluminum => "黑色阳极氧化铝",
            Material::Polycarbonate => "高强度聚碳酸酯",
            Material::RuggedComposite => "带橡胶缓冲的军工复合材料",
            Material::GlossWhitePlastic => "高光白色消费级塑料",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Industrial-design direction for the render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignStyle {
    #[serde(rename = "极简主义 (类 Apple 风格)")]
    Minimalist,
    #[serde(rename = "重工业风 (外露散热片)")]
    HeavyIndustrial,
    #[serde(rename = "赛博朋克未来科技感")]
    Cyberpunk,
    #[serde(rename = "战术军工风格")]
    Tactical,
    #[serde(rename = "现代流线型消费电子风")]
    SleekModern,
}

impl DesignStyle {
    /// All selectable styles, in presentation order.
    pub const ALL: [DesignStyle; 5] = [
        DesignStyle::Minimalist,
        DesignStyle::HeavyIndustrial,
        DesignStyle::Cyberpunk,
        DesignStyle::Tactical,
        DesignStyle::SleekModern,
    ];

    /// Product label used in prompts and on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            DesignStyle::Minimalist => "极简主义 (类 Apple 风格)",
            DesignStyle::HeavyIndustrial => "重工业风 (外露散热片)",
            DesignStyle::Cyberpunk => "赛博朋克未来科技感",
            DesignStyle::Tactical => "战术军工风格",
            DesignStyle::SleekModern => "现代流线型消费电子风",
        }
    }
}

impl std::fmt::Display for DesignStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One generation request's full parameter set. Constructed fresh per
/// request and never mutated after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    pub device_category: DeviceCategory,
    pub material: Material,
    pub style: DesignStyle,
    /// Free-form extra wishes from the user. May be empty; unbounded.
    #[serde(default)]
    pub detail_text: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

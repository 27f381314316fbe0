//! Prompt construction for the two generation calls.
//!
//! Both prompts are deterministic functions of the submitted parameters.
//! The rendering directives are a fixed design contract shared by every
//! request; they are not user-configurable.

use crate::params::GenerationParameters;

/// Substituted into the image prompt when the user supplied no detail text.
pub const DEFAULT_DETAIL_PHRASE: &str = "Standard configuration";

/// Aspect-ratio directive sent with every image request.
pub const IMAGE_ASPECT_RATIO: &str = "4:3";

/// Natural-language description for the image model.
///
/// Mixes a Chinese product description with English rendering terms; the
/// combination renders best for this product class.
pub fn image_prompt(params: &GenerationParameters) -> String {
    let detail = if params.detail_text.is_empty() {
        DEFAULT_DETAIL_PHRASE
    } else {
        &params.detail_text
    };

    format!(
        "Professional industrial design product photography of a mobile signal booster (手机信号放大器).\n\
         Type/Category: {category}.\n\
         Material: {material}.\n\
         Style: {style}.\n\
         Key Details: {detail}.\n\
         Specific features for this device class: visible heat sink fins for cooling (散热鳍片), \
         RF connector ports (N-Type or SMA), LED status indicators, signal strength display.\n\
         Lighting: Studio lighting, cinematic, 8k resolution, unreal engine 5 render quality, \
         neutral dark background.\n\
         View: Isometric perspective.",
        category = params.device_category,
        material = params.material,
        style = params.style,
    )
}

/// Chinese-language instruction for the specification model.
///
/// Detail text is deliberately absent: the sheet depends only on the three
/// categorical parameters.
pub fn spec_instruction(params: &GenerationParameters) -> String {
    format!(
        "为一款假设的手机信号放大器产品生成合理的技术规格（Technical Specs）。请使用中文回答。\n\
         产品属性如下:\n\
         类型: {category}\n\
         材质: {material}\n\
         风格: {style}\n\
         \n\
         请提供：尺寸 (Dimensions), 散热方案 (Cooling), IP防护等级 (IP Rating), 材质详情, \
         接口类型 (Connectors), 预估重量, 以及一句朗朗上口的中文营销口号 (Tagline)。",
        category = params.device_category,
        material = params.material,
        style = params.style,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

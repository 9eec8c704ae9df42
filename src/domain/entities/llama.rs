//! Llama features

use serde::{Deserialize, Serialize};

use super::creature::{check_accessory, check_pool, check_size, FeatureError, NONE};

pub const BODY_COLORS: &[&str] = &[
    "#8B4513", "#D2691E", "#CD853F", "#F4A460", "#D2B48C", "#DEB887", "#BC8F8F", "#A0522D",
    "#F5DEB3", "#E6E6FA", "#FFE4E1", "#F0E68C",
];

pub const NECK_COLORS: &[&str] = &[
    "#654321", "#8B4513", "#A0522D", "#CD853F", "#D2691E", "#F4A460", "#DEB887", "#E6E6FA",
    "#FFE4E1", "#FFF8DC",
];

pub const HEAD_COLORS: &[&str] = &[
    "#8B4513", "#654321", "#A0522D", "#D2691E", "#CD853F", "#F4A460", "#D2B48C", "#DEB887",
    "#F5DEB3", "#FFF8DC",
];

pub const FEET_COLORS: &[&str] = &[
    "#654321", "#8B4513", "#3D2817", "#2F1B14", "#A0522D", "#5C4033", "#6B4423",
];

pub const FUR_PATTERNS: &[&str] = &[
    "solid", "spotted", "patched", "gradient", "two-tone", "freckled",
];

pub const HATS: &[&str] = &[
    "sombrero", "beanie", "wizard", "crown", "beret", "top-hat", NONE,
];
pub const SCARVES: &[&str] = &["striped", "polka-dot", "solid", "checkered", NONE];
pub const SADDLES: &[&str] = &["decorative", "western", "colorful", NONE];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlamaPalette {
    pub body: String,
    pub neck: String,
    pub head: String,
    pub feet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlamaAccessories {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scarf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saddle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LlamaFeatures {
    pub color_palette: LlamaPalette,
    #[serde(default)]
    pub accessories: LlamaAccessories,
    pub fur_pattern: String,
    pub size: f64,
}

impl LlamaFeatures {
    pub fn validate(&self) -> Result<(), FeatureError> {
        let palette = &self.color_palette;
        check_pool("colorPalette.body", &palette.body, BODY_COLORS)?;
        check_pool("colorPalette.neck", &palette.neck, NECK_COLORS)?;
        check_pool("colorPalette.head", &palette.head, HEAD_COLORS)?;
        check_pool("colorPalette.feet", &palette.feet, FEET_COLORS)?;

        let accessories = &self.accessories;
        check_accessory("accessories.hat", accessories.hat.as_deref(), HATS)?;
        check_accessory("accessories.scarf", accessories.scarf.as_deref(), SCARVES)?;
        check_accessory("accessories.saddle", accessories.saddle.as_deref(), SADDLES)?;

        check_pool("furPattern", &self.fur_pattern, FUR_PATTERNS)?;
        check_size(self.size)
    }
}

//! Cat features

use serde::{Deserialize, Serialize};

use super::creature::{check_accessory, check_pool, check_size, FeatureError, NONE};

pub const BODY_COLORS: &[&str] = &[
    "#F5F5F5", "#1C1C1C", "#C0C0C0", "#FF8C69", "#A67B5B", "#D2B48C", "#B0C4DE", "#FFDAB9",
];

pub const EAR_COLORS: &[&str] = &["#FFB6C1", "#FFC0CB", "#F4A7B9", "#FFCCCB"];
pub const PAW_COLORS: &[&str] = &["#FFFFFF", "#EAEAEA", "#DCDCDC", "#FFE4E1"];
pub const EYE_COLORS: &[&str] = &["#32CD32", "#FFD700", "#00BFFF", "#8A2BE2"];

pub const FUR_PATTERNS: &[&str] = &["solid", "striped", "spotted", "tuxedo", "calico", "tabby"];

pub const COLLARS: &[&str] = &["red", "blue", "purple", "rainbow", NONE];
pub const BOWS: &[&str] = &["pink", "yellow", "mint", NONE];
pub const BELLS: &[&str] = &["gold", "silver", NONE];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatPalette {
    pub body: String,
    pub ears: String,
    pub paws: String,
    pub eyes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatAccessories {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bell: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatFeatures {
    pub color_palette: CatPalette,
    #[serde(default)]
    pub accessories: CatAccessories,
    pub fur_pattern: String,
    pub size: f64,
}

impl CatFeatures {
    pub fn validate(&self) -> Result<(), FeatureError> {
        let palette = &self.color_palette;
        check_pool("colorPalette.body", &palette.body, BODY_COLORS)?;
        check_pool("colorPalette.ears", &palette.ears, EAR_COLORS)?;
        check_pool("colorPalette.paws", &palette.paws, PAW_COLORS)?;
        check_pool("colorPalette.eyes", &palette.eyes, EYE_COLORS)?;

        let accessories = &self.accessories;
        check_accessory("accessories.collar", accessories.collar.as_deref(), COLLARS)?;
        check_accessory("accessories.bow", accessories.bow.as_deref(), BOWS)?;
        check_accessory("accessories.bell", accessories.bell.as_deref(), BELLS)?;

        check_pool("furPattern", &self.fur_pattern, FUR_PATTERNS)?;
        check_size(self.size)
    }
}

//! Unicorn features - palette, accessories and hair style pools

use serde::{Deserialize, Serialize};

use super::creature::{check_accessory, check_pool, check_size, FeatureError, NONE};

pub const BODY_COLORS: &[&str] = &[
    "#FF6B9D", "#C77DFF", "#4ECDC4", "#FFE66D", "#FF8C42", "#95E1D3", "#F38181", "#AA96DA",
];

pub const MANE_COLORS: &[&str] = &[
    "#FF1493", "#8A2BE2", "#00CED1", "#FFD700", "#FF6347", "#20B2AA", "#FF69B4", "#9370DB",
];

pub const TAIL_COLORS: &[&str] = &[
    "#FF69B4", "#BA55D3", "#00FA9A", "#FFD700", "#FF4500", "#48D1CC", "#FF1493", "#DA70D6",
];

pub const HORN_COLORS: &[&str] = &["#FFD700", "#C0C0C0", "#FF69B4", "#00CED1", "#FF6347"];

pub const HAIR_STYLES: &[&str] = &["curly", "straight", "wavy", "spiky", "braided", "flowing"];

pub const HATS: &[&str] = &["wizard", "crown", "beret", "top-hat", NONE];
pub const GLASSES: &[&str] = &["sunglasses", "reading-glasses", "star-shaped", NONE];
pub const JEWELRY: &[&str] = &["necklace", "bracelet", "earrings", NONE];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnicornPalette {
    pub body: String,
    pub mane: String,
    pub tail: String,
    pub horn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnicornAccessories {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glasses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jewelry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UnicornFeatures {
    pub color_palette: UnicornPalette,
    #[serde(default)]
    pub accessories: UnicornAccessories,
    pub hair_style: String,
    pub size: f64,
}

impl UnicornFeatures {
    pub fn validate(&self) -> Result<(), FeatureError> {
        let palette = &self.color_palette;
        check_pool("colorPalette.body", &palette.body, BODY_COLORS)?;
        check_pool("colorPalette.mane", &palette.mane, MANE_COLORS)?;
        check_pool("colorPalette.tail", &palette.tail, TAIL_COLORS)?;
        check_pool("colorPalette.horn", &palette.horn, HORN_COLORS)?;

        let accessories = &self.accessories;
        check_accessory("accessories.hat", accessories.hat.as_deref(), HATS)?;
        check_accessory("accessories.glasses", accessories.glasses.as_deref(), GLASSES)?;
        check_accessory("accessories.jewelry", accessories.jewelry.as_deref(), JEWELRY)?;

        check_pool("hairStyle", &self.hair_style, HAIR_STYLES)?;
        check_size(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UnicornFeatures {
        UnicornFeatures {
            color_palette: UnicornPalette {
                body: "#FF6B9D".to_string(),
                mane: "#FFD700".to_string(),
                tail: "#00FA9A".to_string(),
                horn: "#C0C0C0".to_string(),
            },
            accessories: UnicornAccessories {
                hat: Some("top-hat".to_string()),
                glasses: None,
                jewelry: Some("necklace".to_string()),
            },
            hair_style: "braided".to_string(),
            size: 1.05,
        }
    }

    #[test]
    fn test_valid_unicorn() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_horn_color_outside_pool() {
        let mut features = sample();
        // Valid mane color, but not a horn color
        features.color_palette.horn = "#8A2BE2".to_string();
        assert!(matches!(
            features.validate(),
            Err(FeatureError::NotInPool { field: "colorPalette.horn", .. })
        ));
    }

    #[test]
    fn test_wire_shape_omits_absent_accessories() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["colorPalette"]["body"], "#FF6B9D");
        assert_eq!(value["hairStyle"], "braided");
        assert_eq!(value["accessories"]["hat"], "top-hat");
        assert!(value["accessories"].get("glasses").is_none());
    }
}

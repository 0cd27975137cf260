//! Material categories
//!
//! The six waste-separation categories the guide covers. The set is closed:
//! every card, icon and modal on the page is keyed by one of these.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuideError;

/// A waste-separation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    /// 유리
    Glass,
    /// 플라스틱
    Plastic,
    /// 종이
    Paper,
    /// 비닐
    Vinyl,
    /// 금속
    Metal,
    /// 스티로폼
    Styrofoam,
}

impl Material {
    /// Every material, in the order the grid renders them
    pub const ALL: [Material; 6] = [
        Material::Glass,
        Material::Plastic,
        Material::Paper,
        Material::Vinyl,
        Material::Metal,
        Material::Styrofoam,
    ];

    /// Korean display label shown on cards and in the modal
    pub fn label(&self) -> &'static str {
        match self {
            Material::Glass => "유리",
            Material::Plastic => "플라스틱",
            Material::Paper => "종이",
            Material::Vinyl => "비닐",
            Material::Metal => "금속",
            Material::Styrofoam => "스티로폼",
        }
    }

    /// English slug used in asset file names and config keys
    pub fn slug(&self) -> &'static str {
        match self {
            Material::Glass => "glass",
            Material::Plastic => "plastic",
            Material::Paper => "paper",
            Material::Vinyl => "vinyl",
            Material::Metal => "metal",
            Material::Styrofoam => "styrofoam",
        }
    }

    /// Position of this material in [`Material::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Material {
    type Err = GuideError;

    /// Accepts either the Korean label or the English slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Material::ALL
            .into_iter()
            .find(|m| m.label() == trimmed || m.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GuideError::UnknownMaterial(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_six_in_grid_order() {
        let labels: Vec<_> = Material::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["유리", "플라스틱", "종이", "비닐", "금속", "스티로폼"]);
    }

    #[test]
    fn index_matches_position() {
        for (i, m) in Material::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn parse_label_and_slug() {
        assert_eq!("유리".parse::<Material>().unwrap(), Material::Glass);
        assert_eq!("Styrofoam".parse::<Material>().unwrap(), Material::Styrofoam);
        assert_eq!(" metal ".parse::<Material>().unwrap(), Material::Metal);
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "rubber".parse::<Material>().unwrap_err();
        assert!(matches!(err, GuideError::UnknownMaterial(ref s) if s == "rubber"));
    }

    #[test]
    fn serializes_as_slug() {
        let json = serde_json::to_string(&Material::Vinyl).unwrap();
        assert_eq!(json, "\"vinyl\"");
        let back: Material = serde_json::from_str("\"paper\"").unwrap();
        assert_eq!(back, Material::Paper);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Material::Plastic.to_string(), "플라스틱");
    }
}

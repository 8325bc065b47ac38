//! Material types stored in grid cells.
//!
//! Sand is denser than water and sinks through it. Water flows sideways.
//! Empty is the default so a fresh grid starts clear.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// All material types in the simulation.
///
/// Serialized as its raw `u8` tag. Unknown tags are rejected, never coerced
/// to `Empty`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Empty, Material::Sand, Material::Water];

    /// Returns true if a falling grain may move into a cell holding `self`.
    #[inline]
    pub const fn yields_to_sand(self) -> bool {
        match self {
            Material::Empty | Material::Water => true,
            Material::Sand => false,
        }
    }

    /// Single character used by the text grid format.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Material::Empty => '.',
            Material::Sand => 's',
            Material::Water => '~',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Material::Empty),
            's' => Some(Material::Sand),
            '~' => Some(Material::Water),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Material {
    type Error = SimError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Material::Empty),
            1 => Ok(Material::Sand),
            2 => Ok(Material::Water),
            other => Err(SimError::UnknownMaterial(other)),
        }
    }
}

impl From<Material> for u8 {
    fn from(material: Material) -> Self {
        material as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_the_zero_default() {
        assert_eq!(Material::default(), Material::Empty);
        assert_eq!(u8::from(Material::Empty), 0);
    }

    #[test]
    fn tags_convert_both_ways() {
        for material in Material::ALL {
            assert_eq!(Material::try_from(u8::from(material)).ok(), Some(material));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(matches!(
            Material::try_from(3),
            Err(SimError::UnknownMaterial(3))
        ));
    }

    #[test]
    fn deserializing_unknown_tag_fails() {
        let parsed: Result<Material, _> = serde_json::from_str("7");
        assert!(parsed.is_err(), "tag 7 must not decode to a material");

        let water: Material = serde_json::from_str("2").unwrap();
        assert_eq!(water, Material::Water);
        assert_eq!(serde_json::to_string(&Material::Sand).unwrap(), "1");
    }

    #[test]
    fn sand_displaces_empty_and_water_only() {
        assert!(Material::Empty.yields_to_sand());
        assert!(Material::Water.yields_to_sand());
        assert!(!Material::Sand.yields_to_sand());
    }

    #[test]
    fn glyphs_are_distinct() {
        for material in Material::ALL {
            assert_eq!(Material::from_glyph(material.glyph()), Some(material));
        }
        assert_eq!(Material::from_glyph('x'), None);
    }
}

//! Shared value types for the progression and strain systems.

use std::fmt;

use crate::config::OcularConfig;

/// Identifier of an item definition in the external world/item service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u16);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to an item spawned by the item factory collaborator.
///
/// The factory owns the item's actual data; components only move the handle
/// into the character's eye slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle {
    pub id: ItemId,
}

impl ItemHandle {
    pub fn new(id: ItemId) -> Self {
        Self { id }
    }
}

/// Discrete eye-power tier.
///
/// The progression never observes a value outside `0..=3`, and `Locked`
/// implies the system is inactive.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EyeTier {
    /// Not yet unlocked.
    #[default]
    Locked,
    Tier1,
    Tier2,
    Tier3,
}

impl EyeTier {
    pub const MAX: Self = Self::Tier3;

    /// Numeric form used by persistence and the strain coupling (0-3).
    pub const fn number(self) -> u8 {
        match self {
            Self::Locked => 0,
            Self::Tier1 => 1,
            Self::Tier2 => 2,
            Self::Tier3 => 3,
        }
    }

    /// Inverse of [`EyeTier::number`]; `None` outside `0..=3`.
    pub const fn from_number(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Locked),
            1 => Some(Self::Tier1),
            2 => Some(Self::Tier2),
            3 => Some(Self::Tier3),
            _ => None,
        }
    }

    /// The next tier up, or `None` at the top.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Locked => Some(Self::Tier1),
            Self::Tier1 => Some(Self::Tier2),
            Self::Tier2 => Some(Self::Tier3),
            Self::Tier3 => None,
        }
    }

    /// Total experience required to hold this tier.
    pub const fn required_experience(self) -> u32 {
        match self {
            Self::Locked | Self::Tier1 => 0,
            Self::Tier2 => OcularConfig::EXPERIENCE_TIER2,
            Self::Tier3 => OcularConfig::EXPERIENCE_TIER3,
        }
    }

    /// Eye-slot item corresponding 1:1 to this tier.
    pub const fn item_id(self) -> ItemId {
        match self {
            Self::Locked => OcularConfig::EYE_ITEM_LOCKED,
            Self::Tier1 => OcularConfig::EYE_ITEM_TIER1,
            Self::Tier2 => OcularConfig::EYE_ITEM_TIER2,
            Self::Tier3 => OcularConfig::EYE_ITEM_TIER3,
        }
    }

    /// User-facing tier name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Locked => "Locked",
            Self::Tier1 => "Tier 1",
            Self::Tier2 => "Tier 2",
            Self::Tier3 => "Tier 3",
        }
    }
}

/// Classification band derived from the strain gauge value. Never stored.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StrainBand {
    /// 0-25: cosmetic/buff band.
    Low,
    /// 26-50: early penalty band.
    Medium,
    /// 51-75: severe penalty band.
    High,
    /// 76-100: critical penalty band.
    Critical,
}

impl StrainBand {
    /// Classifies a gauge value (callers keep the value within 0..=100).
    pub const fn from_value(value: u8) -> Self {
        match value {
            0..=25 => Self::Low,
            26..=50 => Self::Medium,
            51..=75 => Self::High,
            _ => Self::Critical,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// User-facing band name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Display color used by client overlays.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "yellow",
            Self::High => "orange",
            Self::Critical => "red",
        }
    }

    /// Sensory hint sent to the character when this band is entered.
    ///
    /// Mechanical buffs/penalties are applied elsewhere; only the
    /// classification and the notice are owned here.
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Low => "your reflexes feel sharpened",
            Self::Medium => "your eyes begin to hurt",
            Self::High => "your vision is blurring",
            Self::Critical => "your eyes are bleeding, danger!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_numbers_round_trip() {
        for tier in [EyeTier::Locked, EyeTier::Tier1, EyeTier::Tier2, EyeTier::Tier3] {
            assert_eq!(EyeTier::from_number(tier.number()), Some(tier));
        }
        assert_eq!(EyeTier::from_number(4), None);
    }

    #[test]
    fn tier_progression_is_linear_and_bounded() {
        assert_eq!(EyeTier::Locked.next(), Some(EyeTier::Tier1));
        assert_eq!(EyeTier::Tier2.next(), Some(EyeTier::Tier3));
        assert_eq!(EyeTier::Tier3.next(), None);
    }

    #[test]
    fn experience_thresholds_match_design() {
        assert_eq!(EyeTier::Tier1.required_experience(), 0);
        assert_eq!(EyeTier::Tier2.required_experience(), 1000);
        assert_eq!(EyeTier::Tier3.required_experience(), 3000);
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        assert_eq!(StrainBand::from_value(0), StrainBand::Low);
        assert_eq!(StrainBand::from_value(25), StrainBand::Low);
        assert_eq!(StrainBand::from_value(26), StrainBand::Medium);
        assert_eq!(StrainBand::from_value(50), StrainBand::Medium);
        assert_eq!(StrainBand::from_value(51), StrainBand::High);
        assert_eq!(StrainBand::from_value(75), StrainBand::High);
        assert_eq!(StrainBand::from_value(76), StrainBand::Critical);
        assert_eq!(StrainBand::from_value(100), StrainBand::Critical);
    }
}

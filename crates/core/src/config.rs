use crate::types::ItemId;

/// Tunable constants for both per-character systems.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OcularConfig;

impl OcularConfig {
    // ===== progression =====
    /// Experience granted as a side effect of each activation.
    pub const USAGE_EXPERIENCE: u32 = 10;
    /// Total experience required to reach tier 2.
    pub const EXPERIENCE_TIER2: u32 = 1000;
    /// Total experience required to reach tier 3.
    pub const EXPERIENCE_TIER3: u32 = 3000;

    // ===== eye slot items, one per tier =====
    pub const EYE_ITEM_LOCKED: ItemId = ItemId(36311);
    pub const EYE_ITEM_TIER1: ItemId = ItemId(36312);
    pub const EYE_ITEM_TIER2: ItemId = ItemId(36313);
    pub const EYE_ITEM_TIER3: ItemId = ItemId(36314);

    // ===== strain gauge =====
    /// Upper bound of the strain gauge.
    pub const STRAIN_MAX: u8 = 100;
    /// Growth interval at tier 1, in whole seconds.
    pub const GROWTH_BASE_INTERVAL_SECS: u64 = 10;
    /// Interval reduction per tier above 1.
    pub const GROWTH_STEP_SECS: u64 = 2;
    /// Floor for the growth interval regardless of tier.
    pub const GROWTH_MIN_INTERVAL_SECS: u64 = 2;
    /// Recovery interval while the gauge is inactive.
    pub const RECOVERY_INTERVAL_SECS: u64 = 5;

    /// Seconds between +1 growth steps for a given driver level.
    ///
    /// Level 1 grows every 10s, each further level shaves 2s, floored at 2s.
    /// The caller guarantees `level >= 1` (the driver must be unlocked to be
    /// active), but the arithmetic saturates anyway.
    pub fn growth_interval_secs(level: u8) -> u64 {
        let steps = u64::from(level.saturating_sub(1));
        Self::GROWTH_BASE_INTERVAL_SECS
            .saturating_sub(steps * Self::GROWTH_STEP_SECS)
            .max(Self::GROWTH_MIN_INTERVAL_SECS)
    }

    /// Mid-band strain seed applied when the driving system changes level
    /// while the gauge is running. Assigned directly, never added.
    pub fn strain_seed_for_level(level: u8) -> u8 {
        match level {
            1 => 12,
            2 => 38,
            3 => 63,
            4 => 88,
            _ => 0,
        }
    }
}

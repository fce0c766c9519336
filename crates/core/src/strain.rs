//! The strain resource system.
//!
//! A bounded 0-100 gauge with growth/decay dynamics. Growth cadence is
//! parameterized by the eye-power level read through the [`LevelSource`]
//! capability once per growth tick; the gauge never mutates its driver.
//!
//! The periodic update is a fixed-point discrete simulation over whole
//! seconds: each [`StrainGauge::on_think`] call advances state by at most one
//! unit per relevant timer, so the orchestrator must call it at least once
//! per second to avoid drifting past the defined cadence.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::character::{Character, LevelSource, NoticeCategory, StrainSink};
use crate::config::OcularConfig;
use crate::env::{OracleError, SystemEnv};
use crate::error::{ComponentError, ErrorSeverity};
use crate::types::StrainBand;

/// Errors raised by [`StrainGauge`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StrainError {
    /// The owning character reference could not be resolved.
    #[error("owning character is no longer available")]
    CharacterGone,

    /// `activate` was called while already active.
    #[error("strain gauge is already active")]
    AlreadyActive,

    /// `deactivate` was called while already inactive.
    #[error("strain gauge is not active")]
    NotActive,

    /// The `can_activate` gate rejected the transition.
    #[error("strain gauge cannot be activated right now")]
    ActivationBlocked,

    /// The `can_deactivate` gate rejected the transition.
    #[error("strain gauge cannot be deactivated right now")]
    DeactivationBlocked,

    /// Zero-amount change, or a reduction at an already-empty gauge.
    #[error("strain amount must be greater than zero")]
    ZeroAmount,

    /// Strain can only be added while the gauge is active.
    #[error("strain gauge is inactive")]
    Inactive,

    /// A required collaborator was missing from the environment.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ComponentError for StrainError {
    fn severity(&self) -> ErrorSeverity {
        use StrainError::*;
        match self {
            CharacterGone => ErrorSeverity::Binding,
            AlreadyActive | NotActive | ActivationBlocked | DeactivationBlocked => {
                ErrorSeverity::Precondition
            }
            ZeroAmount | Inactive => ErrorSeverity::NoOp,
            Oracle(_) => ErrorSeverity::Oracle,
        }
    }

    fn error_code(&self) -> &'static str {
        use StrainError::*;
        match self {
            CharacterGone => "STRAIN_CHARACTER_GONE",
            AlreadyActive => "STRAIN_ALREADY_ACTIVE",
            NotActive => "STRAIN_NOT_ACTIVE",
            ActivationBlocked => "STRAIN_ACTIVATION_BLOCKED",
            DeactivationBlocked => "STRAIN_DEACTIVATION_BLOCKED",
            ZeroAmount => "STRAIN_ZERO_AMOUNT",
            Inactive => "STRAIN_INACTIVE",
            Oracle(_) => "STRAIN_ORACLE_MISSING",
        }
    }
}

/// Per-character strain gauge.
///
/// Constructed unbound via [`Default`]; becomes live only after
/// [`StrainGauge::initialize`]. All timers are per-instance fields; no state
/// is shared across characters.
#[derive(Default)]
pub struct StrainGauge {
    character: Option<Weak<dyn Character>>,
    value: u8,
    total_accumulated: u32,
    active: bool,
    last_activation: u64,
    last_deactivation: u64,
    last_recovery: u64,
}

impl StrainGauge {
    /// Binds this component to its owning character and resets all fields.
    ///
    /// The recovery timer starts at the current time so a freshly bound gauge
    /// does not immediately decay persisted strain.
    pub fn initialize(&mut self, character: &Rc<dyn Character>, env: &SystemEnv<'_>) {
        self.character = Some(Rc::downgrade(character));
        self.value = 0;
        self.total_accumulated = 0;
        self.active = false;
        self.last_activation = 0;
        self.last_deactivation = 0;
        self.last_recovery = env.now_epoch_seconds().unwrap_or(0);

        tracing::debug!(
            "[StrainGauge] initialized for character {}",
            character.name()
        );
    }

    fn character(&self) -> Option<Rc<dyn Character>> {
        self.character.as_ref()?.upgrade()
    }

    fn resolve(&self) -> Result<Rc<dyn Character>, StrainError> {
        self.character().ok_or(StrainError::CharacterGone)
    }

    fn notify(&self, character: &dyn Character, text: &str) {
        character.send_notice(NoticeCategory::Status, text);
    }

    fn notify_band(&self, character: &dyn Character) {
        let band = self.band();
        let category = if band == StrainBand::Critical {
            NoticeCategory::Warning
        } else {
            NoticeCategory::Status
        };
        character.send_notice(
            category,
            &format!("Strain {} ({}/100): {}", band.label(), self.value, band.hint()),
        );
        tracing::info!(
            "[StrainGauge] character {} strain band changed to {} (value: {})",
            character.name(),
            band.label(),
            self.value
        );
    }

    // ===== queries =====

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Lifetime total of attempted growth; never reduced by decay or clamping.
    pub fn total_accumulated(&self) -> u32 {
        self.total_accumulated
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Classification band derived from the current value.
    pub fn band(&self) -> StrainBand {
        StrainBand::from_value(self.value)
    }

    pub fn last_activation(&self) -> u64 {
        self.last_activation
    }

    pub fn last_deactivation(&self) -> u64 {
        self.last_deactivation
    }

    /// Reserved activation gate; always true today.
    pub fn can_activate(&self) -> bool {
        true
    }

    /// Reserved deactivation gate; always true today.
    pub fn can_deactivate(&self) -> bool {
        true
    }

    /// Seconds since the last activation, or 0 if never activated.
    pub fn time_since_last_activation(&self, env: &SystemEnv<'_>) -> Result<u64, OracleError> {
        if self.last_activation == 0 {
            return Ok(0);
        }
        Ok(env
            .now_epoch_seconds()?
            .saturating_sub(self.last_activation))
    }

    /// Seconds since the last deactivation, or 0 if never deactivated.
    pub fn time_since_last_deactivation(&self, env: &SystemEnv<'_>) -> Result<u64, OracleError> {
        if self.last_deactivation == 0 {
            return Ok(0);
        }
        Ok(env
            .now_epoch_seconds()?
            .saturating_sub(self.last_deactivation))
    }

    // ===== transitions =====

    /// Starts gauge growth.
    pub fn activate(&mut self, env: &SystemEnv<'_>) -> Result<(), StrainError> {
        let character = self.resolve()?;

        if self.active {
            self.notify(character.as_ref(), "Strain gauge is already active!");
            return Err(StrainError::AlreadyActive);
        }

        if !self.can_activate() {
            self.notify(
                character.as_ref(),
                "The strain gauge cannot be activated right now!",
            );
            return Err(StrainError::ActivationBlocked);
        }

        let now = env.now_epoch_seconds()?;
        self.active = true;
        self.last_activation = now;

        self.notify(
            character.as_ref(),
            "Strain gauge active. Strain will build while your eye power is in use.",
        );
        tracing::info!(
            "[StrainGauge] character {} activated strain gauge",
            character.name()
        );

        Ok(())
    }

    /// Stops gauge growth; decay takes over on subsequent ticks.
    pub fn deactivate(&mut self, env: &SystemEnv<'_>) -> Result<(), StrainError> {
        let character = self.resolve()?;

        if !self.active {
            self.notify(character.as_ref(), "Strain gauge is already inactive!");
            return Err(StrainError::NotActive);
        }

        if !self.can_deactivate() {
            self.notify(
                character.as_ref(),
                "The strain gauge cannot be deactivated right now!",
            );
            return Err(StrainError::DeactivationBlocked);
        }

        let now = env.now_epoch_seconds()?;
        self.active = false;
        self.last_deactivation = now;

        self.notify(
            character.as_ref(),
            "Strain gauge inactive. Strain will slowly recover.",
        );
        tracing::info!(
            "[StrainGauge] character {} deactivated strain gauge",
            character.name()
        );

        Ok(())
    }

    /// Adds strain, clamping the gauge at 100.
    ///
    /// The lifetime total takes the raw amount unconditionally: it tracks
    /// attempted growth, not applied growth.
    pub fn add_strain(&mut self, amount: u8) -> Result<(), StrainError> {
        let character = self.resolve()?;

        if amount == 0 {
            return Err(StrainError::ZeroAmount);
        }

        if !self.active {
            return Err(StrainError::Inactive);
        }

        let old_band = self.band();
        let raised = u16::from(self.value) + u16::from(amount);
        self.value = raised.min(u16::from(OcularConfig::STRAIN_MAX)) as u8;
        self.total_accumulated = self.total_accumulated.saturating_add(u32::from(amount));

        if self.band() != old_band {
            self.notify_band(character.as_ref());
        }

        tracing::debug!(
            "[StrainGauge] character {} strain now {} (band {})",
            character.name(),
            self.value,
            self.band().label()
        );

        Ok(())
    }

    /// Reduces strain, flooring the gauge at 0.
    pub fn reduce_strain(&mut self, amount: u8) -> Result<(), StrainError> {
        let character = self.resolve()?;

        if amount == 0 || self.value == 0 {
            return Err(StrainError::ZeroAmount);
        }

        let old_band = self.band();
        self.value = self.value.saturating_sub(amount);

        if self.band() != old_band {
            self.notify_band(character.as_ref());
        }

        tracing::debug!(
            "[StrainGauge] character {} strain reduced to {} (band {})",
            character.name(),
            self.value,
            self.band().label()
        );

        Ok(())
    }

    /// Alias for [`StrainGauge::reduce_strain`], kept for script bindings.
    pub fn remove_strain(&mut self, amount: u8) -> Result<(), StrainError> {
        self.reduce_strain(amount)
    }

    /// Unconditionally empties the gauge.
    pub fn reset_strain(&mut self) {
        self.value = 0;
        if let Some(character) = self.character() {
            self.notify(character.as_ref(), "Strain reset to 0!");
        }
    }

    /// Snaps the gauge to the seed value for the given driver level.
    ///
    /// Used when the driving system changes level while strain is running so
    /// the gauge reflects the new tier immediately instead of drifting there.
    pub fn set_level_dependency(&mut self, level: u8) {
        let old_band = self.band();
        self.value = OcularConfig::strain_seed_for_level(level);

        if self.band() != old_band
            && let Some(character) = self.character()
        {
            self.notify_band(character.as_ref());
        }

        tracing::debug!(
            "[StrainGauge] seeded strain {} for driver level {}",
            self.value,
            level
        );
    }

    /// The once-per-tick update.
    ///
    /// Active: grows +1 per growth interval (driven by the eye-power level)
    /// until the cap; force-deactivates when the driver reports inactive.
    /// Inactive: recovers -1 every 5 seconds down to 0.
    pub fn on_think(&mut self, env: &SystemEnv<'_>) -> Result<(), StrainError> {
        let character = self.resolve()?;
        let now = env.now_epoch_seconds()?;

        if self.active {
            // Strain only grows while its driver is active; self-heal if the
            // driver was deactivated out-of-band.
            let driver_level = character
                .level_source()
                .filter(|driver| driver.is_active())
                .map(|driver| driver.level_number());
            let Some(level) = driver_level else {
                self.active = false;
                self.last_deactivation = now;
                self.notify(
                    character.as_ref(),
                    "Your eye power has faded. Strain will slowly recover.",
                );
                tracing::info!(
                    "[StrainGauge] character {} gauge forced inactive, driver is not active",
                    character.name()
                );
                return Ok(());
            };

            let interval = OcularConfig::growth_interval_secs(level);
            if now.saturating_sub(self.last_activation) >= interval
                && self.value < OcularConfig::STRAIN_MAX
            {
                let old_band = self.band();
                self.value += 1;
                self.total_accumulated = self.total_accumulated.saturating_add(1);
                self.last_activation = now;

                if self.band() != old_band {
                    self.notify_band(character.as_ref());
                }
            }
        } else if self.value > 0
            && now.saturating_sub(self.last_recovery) >= OcularConfig::RECOVERY_INTERVAL_SECS
        {
            self.value -= 1;
            self.last_recovery = now;

            tracing::debug!(
                "[StrainGauge] character {} strain recovered to {}",
                character.name(),
                self.value
            );
        }

        Ok(())
    }

    // ===== persistence accessors =====

    /// Restores the gauge value, clamping out-of-range input.
    pub fn set_value(&mut self, raw: u8) {
        if raw > OcularConfig::STRAIN_MAX {
            tracing::warn!(
                "[StrainGauge] persisted strain {} out of range, clamping to {}",
                raw,
                OcularConfig::STRAIN_MAX
            );
            self.value = OcularConfig::STRAIN_MAX;
        } else {
            self.value = raw;
        }
    }

    pub fn set_total_accumulated(&mut self, total: u32) {
        self.total_accumulated = total;
    }
}

/// The driver-facing view of a shared, interiorly-mutable gauge.
///
/// Redundant transitions are absorbed here so the driver never triggers
/// already-active/already-inactive notices on the gauge.
impl StrainSink for RefCell<StrainGauge> {
    fn set_level_dependency(&self, level: u8) {
        self.borrow_mut().set_level_dependency(level);
    }

    fn begin_growth(&self, env: &SystemEnv<'_>) {
        if self.borrow().is_active() {
            return;
        }
        if let Err(err) = self.borrow_mut().activate(env) {
            tracing::debug!("[StrainGauge] begin_growth skipped: {err}");
        }
    }

    fn halt_growth(&self, env: &SystemEnv<'_>) {
        if !self.borrow().is_active() {
            return;
        }
        if let Err(err) = self.borrow_mut().deactivate(env) {
            tracing::debug!("[StrainGauge] halt_growth skipped: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::character::LevelSource;
    use crate::env::{ClockOracle, ItemOracle};
    use crate::types::{ItemHandle, ItemId};

    struct FixedClock {
        now: Cell<u64>,
    }

    impl FixedClock {
        fn at(now: u64) -> Self {
            Self { now: Cell::new(now) }
        }

        fn advance(&self, secs: u64) {
            self.now.set(self.now.get() + secs);
        }
    }

    impl ClockOracle for FixedClock {
        fn now_epoch_seconds(&self) -> u64 {
            self.now.get()
        }
    }

    struct StubItems;

    impl ItemOracle for StubItems {
        fn create_item(&self, id: ItemId) -> Option<ItemHandle> {
            Some(ItemHandle::new(id))
        }
    }

    /// Stand-in driver, controllable from tests.
    struct StubLevelSource {
        active: Cell<bool>,
        level: Cell<u8>,
    }

    impl LevelSource for StubLevelSource {
        fn is_active(&self) -> bool {
            self.active.get()
        }

        fn level_number(&self) -> u8 {
            self.level.get()
        }
    }

    #[derive(Default)]
    struct StubCharacter {
        notices: RefCell<Vec<(NoticeCategory, String)>>,
        driver: RefCell<Option<Rc<StubLevelSource>>>,
    }

    impl Character for StubCharacter {
        fn name(&self) -> &str {
            "Kawarama"
        }

        fn send_notice(&self, category: NoticeCategory, text: &str) {
            self.notices.borrow_mut().push((category, text.to_string()));
        }

        fn eye_slot_item(&self) -> Option<ItemId> {
            None
        }

        fn set_eye_slot_item(&self, _item: ItemHandle) {}

        fn clear_eye_slot(&self) {}

        fn level_source(&self) -> Option<Rc<dyn LevelSource>> {
            self.driver
                .borrow()
                .clone()
                .map(|driver| driver as Rc<dyn LevelSource>)
        }

        fn strain_sink(&self) -> Option<Rc<dyn StrainSink>> {
            None
        }
    }

    fn bound_gauge(clock: &FixedClock) -> (Rc<StubCharacter>, StrainGauge) {
        let character = Rc::new(StubCharacter::default());
        let handle: Rc<dyn Character> = character.clone();
        let items = StubItems;
        let env = SystemEnv::with_all(clock, &items);
        let mut gauge = StrainGauge::default();
        gauge.initialize(&handle, &env);
        (character, gauge)
    }

    fn with_driver(character: &StubCharacter, active: bool, level: u8) -> Rc<StubLevelSource> {
        let driver = Rc::new(StubLevelSource {
            active: Cell::new(active),
            level: Cell::new(level),
        });
        *character.driver.borrow_mut() = Some(driver.clone());
        driver
    }

    fn env<'a>(clock: &'a FixedClock, items: &'a StubItems) -> SystemEnv<'a> {
        SystemEnv::with_all(clock, items)
    }

    #[test]
    fn add_strain_clamps_value_but_total_tracks_attempts() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (_character, mut gauge) = bound_gauge(&clock);
        gauge.activate(&env(&clock, &items)).unwrap();

        gauge.add_strain(90).unwrap();
        gauge.add_strain(30).unwrap();

        assert_eq!(gauge.value(), 100);
        assert_eq!(gauge.total_accumulated(), 120);
    }

    #[test]
    fn add_strain_rejects_zero_and_inactive() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (_character, mut gauge) = bound_gauge(&clock);

        assert_eq!(gauge.add_strain(0).unwrap_err(), StrainError::ZeroAmount);
        assert_eq!(gauge.add_strain(5).unwrap_err(), StrainError::Inactive);
        assert_eq!(gauge.value(), 0);
        assert_eq!(gauge.total_accumulated(), 0);

        gauge.activate(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.add_strain(0).unwrap_err(), StrainError::ZeroAmount);
    }

    #[test]
    fn reduce_strain_floors_at_zero() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (_character, mut gauge) = bound_gauge(&clock);
        gauge.activate(&env(&clock, &items)).unwrap();
        gauge.add_strain(10).unwrap();

        gauge.reduce_strain(200).unwrap();
        assert_eq!(gauge.value(), 0);

        assert_eq!(gauge.reduce_strain(1).unwrap_err(), StrainError::ZeroAmount);
    }

    #[test]
    fn band_crossing_emits_notice() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (character, mut gauge) = bound_gauge(&clock);
        gauge.activate(&env(&clock, &items)).unwrap();
        character.notices.borrow_mut().clear();

        gauge.add_strain(25).unwrap();
        assert!(character.notices.borrow().is_empty());

        gauge.add_strain(1).unwrap();
        let notices = character.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].1.contains("Medium"));
        assert!(notices[0].1.contains("your eyes begin to hurt"));
    }

    #[test]
    fn critical_band_notice_uses_warning_category() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (character, mut gauge) = bound_gauge(&clock);
        gauge.activate(&env(&clock, &items)).unwrap();
        character.notices.borrow_mut().clear();

        gauge.add_strain(80).unwrap();
        let notices = character.notices.borrow();
        let (category, text) = notices.last().unwrap();
        assert_eq!(*category, NoticeCategory::Warning);
        assert!(text.contains("your eyes are bleeding"));
    }

    #[test]
    fn set_level_dependency_assigns_seed_regardless_of_prior_value() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (_character, mut gauge) = bound_gauge(&clock);
        gauge.activate(&env(&clock, &items)).unwrap();
        gauge.add_strain(97).unwrap();

        gauge.set_level_dependency(2);
        assert_eq!(gauge.value(), 38);

        gauge.set_level_dependency(9);
        assert_eq!(gauge.value(), 0);
    }

    #[test]
    fn growth_waits_for_the_full_interval_at_level_one() {
        let clock = FixedClock::at(1000);
        let items = StubItems;
        let (character, mut gauge) = bound_gauge(&clock);
        with_driver(&character, true, 1);
        gauge.activate(&env(&clock, &items)).unwrap();

        clock.advance(9);
        gauge.on_think(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.value(), 0);

        clock.advance(1);
        gauge.on_think(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.value(), 1);
        assert_eq!(gauge.total_accumulated(), 1);

        // Interval restarts from the growth step.
        gauge.on_think(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.value(), 1);

        clock.advance(10);
        gauge.on_think(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.value(), 2);
    }

    #[test]
    fn growth_is_faster_at_higher_driver_levels() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (character, mut gauge) = bound_gauge(&clock);
        with_driver(&character, true, 3);
        gauge.activate(&env(&clock, &items)).unwrap();

        clock.advance(5);
        gauge.on_think(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.value(), 0);

        clock.advance(1);
        gauge.on_think(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.value(), 1);
    }

    #[test]
    fn growth_stops_at_the_cap() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (character, mut gauge) = bound_gauge(&clock);
        with_driver(&character, true, 1);
        gauge.activate(&env(&clock, &items)).unwrap();
        gauge.add_strain(100).unwrap();

        clock.advance(60);
        gauge.on_think(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.value(), 100);
        assert_eq!(gauge.total_accumulated(), 100);
    }

    #[test]
    fn driver_inactivity_forces_deactivation_without_growth() {
        let clock = FixedClock::at(500);
        let items = StubItems;
        let (character, mut gauge) = bound_gauge(&clock);
        let driver = with_driver(&character, true, 2);
        gauge.activate(&env(&clock, &items)).unwrap();
        gauge.add_strain(10).unwrap();

        driver.active.set(false);
        clock.advance(30);
        gauge.on_think(&env(&clock, &items)).unwrap();

        assert!(!gauge.is_active());
        assert_eq!(gauge.value(), 10);
        assert_eq!(gauge.last_deactivation(), 530);
    }

    #[test]
    fn missing_driver_counts_as_inactive() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (_character, mut gauge) = bound_gauge(&clock);
        gauge.activate(&env(&clock, &items)).unwrap();

        gauge.on_think(&env(&clock, &items)).unwrap();
        assert!(!gauge.is_active());
    }

    #[test]
    fn recovery_decays_one_point_every_five_seconds() {
        let clock = FixedClock::at(100);
        let items = StubItems;
        let (_character, mut gauge) = bound_gauge(&clock);
        gauge.activate(&env(&clock, &items)).unwrap();
        gauge.add_strain(5).unwrap();
        gauge.deactivate(&env(&clock, &items)).unwrap();

        clock.advance(4);
        gauge.on_think(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.value(), 5);

        clock.advance(1);
        gauge.on_think(&env(&clock, &items)).unwrap();
        assert_eq!(gauge.value(), 4);

        // Fully recover; the gauge never goes below zero.
        for _ in 0..20 {
            clock.advance(5);
            gauge.on_think(&env(&clock, &items)).unwrap();
        }
        assert_eq!(gauge.value(), 0);
        assert_eq!(gauge.total_accumulated(), 5);
    }

    #[test]
    fn activation_symmetry_rejects_third_consecutive_call() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (_character, mut gauge) = bound_gauge(&clock);

        gauge.activate(&env(&clock, &items)).unwrap();
        assert_eq!(
            gauge.activate(&env(&clock, &items)).unwrap_err(),
            StrainError::AlreadyActive
        );

        gauge.deactivate(&env(&clock, &items)).unwrap();
        assert_eq!(
            gauge.deactivate(&env(&clock, &items)).unwrap_err(),
            StrainError::NotActive
        );
    }

    #[test]
    fn reset_strain_empties_the_gauge() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (_character, mut gauge) = bound_gauge(&clock);
        gauge.activate(&env(&clock, &items)).unwrap();
        gauge.add_strain(42).unwrap();

        gauge.reset_strain();
        assert_eq!(gauge.value(), 0);
    }

    #[test]
    fn persisted_value_is_clamped() {
        let clock = FixedClock::at(0);
        let (_character, mut gauge) = bound_gauge(&clock);

        gauge.set_value(250);
        assert_eq!(gauge.value(), 100);

        gauge.set_value(37);
        assert_eq!(gauge.value(), 37);
        assert_eq!(gauge.band(), StrainBand::Medium);
    }

    #[test]
    fn operations_fail_silently_after_character_is_gone() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (character, mut gauge) = bound_gauge(&clock);
        drop(character);

        assert_eq!(
            gauge.activate(&env(&clock, &items)).unwrap_err(),
            StrainError::CharacterGone
        );
        assert_eq!(
            gauge.on_think(&env(&clock, &items)).unwrap_err(),
            StrainError::CharacterGone
        );
        assert_eq!(gauge.value(), 0);
    }

    #[test]
    fn sink_absorbs_redundant_transitions() {
        let clock = FixedClock::at(0);
        let items = StubItems;
        let (character, gauge) = bound_gauge(&clock);
        let gauge = Rc::new(RefCell::new(gauge));
        let sink: &dyn StrainSink = gauge.as_ref();

        sink.begin_growth(&env(&clock, &items));
        character.notices.borrow_mut().clear();
        sink.begin_growth(&env(&clock, &items));
        assert!(character.notices.borrow().is_empty());
        assert!(gauge.borrow().is_active());

        sink.halt_growth(&env(&clock, &items));
        character.notices.borrow_mut().clear();
        sink.halt_growth(&env(&clock, &items));
        assert!(character.notices.borrow().is_empty());
        assert!(!gauge.borrow().is_active());
    }
}

//! The eye-power leveling system.
//!
//! Four tiers, experience-gated advancement, toggle activation. This is the
//! leaf component of the pair: it has no periodic tick (every transition is
//! command-driven) and it never reads the strain gauge, only notifies it
//! through the [`StrainSink`] capability when activation state or tier change.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::character::{Character, LevelSource, NoticeCategory, StrainSink};
use crate::config::OcularConfig;
use crate::env::{OracleError, SystemEnv};
use crate::error::{ComponentError, ErrorSeverity};
use crate::types::EyeTier;

/// Errors raised by [`LevelProgression`] operations.
///
/// None of these are fatal: every failure leaves the component unchanged and
/// is reported to the orchestrator, which decides whether to retry, ignore,
/// or relay to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    /// The owning character reference could not be resolved.
    #[error("owning character is no longer available")]
    CharacterGone,

    /// `unlock` was called on an already-unlocked system.
    #[error("eye power is already unlocked")]
    AlreadyUnlocked,

    /// The operation requires an unlocked system.
    #[error("eye power is locked")]
    Locked,

    /// `activate` was called while already active.
    #[error("eye power is already active")]
    AlreadyActive,

    /// `deactivate` was called while already inactive.
    #[error("eye power is not active")]
    NotActive,

    /// The `can_activate` gate rejected the transition.
    #[error("eye power cannot be activated right now")]
    ActivationBlocked,

    /// `increase_level` was called at the top tier.
    #[error("eye power is already at the maximum tier")]
    MaxTier,

    /// Not enough experience for the next tier; `needed` is the exact
    /// remaining amount.
    #[error("insufficient experience: need {needed}")]
    InsufficientExperience { needed: u32 },

    /// Zero-amount experience grant.
    #[error("experience amount must be greater than zero")]
    ZeroAmount,

    /// A required collaborator was missing from the environment.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ComponentError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        use ProgressionError::*;
        match self {
            CharacterGone => ErrorSeverity::Binding,
            AlreadyUnlocked | Locked | AlreadyActive | NotActive | ActivationBlocked | MaxTier
            | InsufficientExperience { .. } => ErrorSeverity::Precondition,
            ZeroAmount => ErrorSeverity::NoOp,
            Oracle(_) => ErrorSeverity::Oracle,
        }
    }

    fn error_code(&self) -> &'static str {
        use ProgressionError::*;
        match self {
            CharacterGone => "PROGRESSION_CHARACTER_GONE",
            AlreadyUnlocked => "PROGRESSION_ALREADY_UNLOCKED",
            Locked => "PROGRESSION_LOCKED",
            AlreadyActive => "PROGRESSION_ALREADY_ACTIVE",
            NotActive => "PROGRESSION_NOT_ACTIVE",
            ActivationBlocked => "PROGRESSION_ACTIVATION_BLOCKED",
            MaxTier => "PROGRESSION_MAX_TIER",
            InsufficientExperience { .. } => "PROGRESSION_INSUFFICIENT_EXPERIENCE",
            ZeroAmount => "PROGRESSION_ZERO_AMOUNT",
            Oracle(_) => "PROGRESSION_ORACLE_MISSING",
        }
    }
}

/// Per-character eye-power progression state machine.
///
/// Constructed unbound via [`Default`]; becomes live only after
/// [`LevelProgression::initialize`] attaches it to its character and resets
/// every field. Destroyed with the character.
#[derive(Default)]
pub struct LevelProgression {
    character: Option<Weak<dyn Character>>,
    tier: EyeTier,
    experience: u32,
    usage_count: u32,
    active: bool,
    last_activation: u64,
}

impl LevelProgression {
    /// Binds this component to its owning character and resets all fields.
    ///
    /// Also performs the first eye-slot sync: an empty slot is populated with
    /// the item matching the current (locked) tier.
    pub fn initialize(&mut self, character: &Rc<dyn Character>, env: &SystemEnv<'_>) {
        self.character = Some(Rc::downgrade(character));
        self.tier = EyeTier::Locked;
        self.experience = 0;
        self.usage_count = 0;
        self.active = false;
        self.last_activation = 0;

        self.ensure_eye_slot(character.as_ref(), env);

        tracing::debug!(
            "[LevelProgression] initialized for character {}",
            character.name()
        );
    }

    fn character(&self) -> Option<Rc<dyn Character>> {
        self.character.as_ref()?.upgrade()
    }

    fn resolve(&self) -> Result<Rc<dyn Character>, ProgressionError> {
        self.character().ok_or(ProgressionError::CharacterGone)
    }

    fn notify(&self, character: &dyn Character, text: &str) {
        character.send_notice(NoticeCategory::Status, &format!("[Eye Power] {text}"));
    }

    // ===== queries =====

    pub fn tier(&self) -> EyeTier {
        self.tier
    }

    /// Numeric tier for persistence and the strain coupling (0 = locked).
    pub fn level_number(&self) -> u8 {
        self.tier.number()
    }

    pub fn is_unlocked(&self) -> bool {
        self.tier != EyeTier::Locked
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn usage_count(&self) -> u32 {
        self.usage_count
    }

    /// Epoch seconds of the last activation; 0 = never activated.
    pub fn last_activation(&self) -> u64 {
        self.last_activation
    }

    /// Reserved activation gate; today equivalent to unlocked-and-inactive.
    pub fn can_activate(&self) -> bool {
        self.is_unlocked() && !self.active
    }

    /// Pure predicate: unlocked, below the top tier, and enough experience
    /// for the next one.
    pub fn can_evolve(&self) -> bool {
        let Some(next) = self.tier.next() else {
            return false;
        };
        self.is_unlocked() && self.experience >= next.required_experience()
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

    /// One-line status summary for chat/inspection commands.
    pub fn summary(&self) -> String {
        if !self.is_unlocked() {
            return "Eye power: Locked".to_string();
        }
        let mut info = format!(
            "Eye power: {} | Experience: {} | Uses: {} | Status: {}",
            self.tier.label(),
            self.experience,
            self.usage_count,
            if self.active { "Active" } else { "Inactive" },
        );
        if self.can_evolve() {
            info.push_str(" | READY TO EVOLVE");
        }
        info
    }

    // ===== transitions =====

    /// Unlocks the system: tier 1, experience reset, auto-activation.
    pub fn unlock(&mut self, env: &SystemEnv<'_>) -> Result<(), ProgressionError> {
        let character = self.resolve()?;

        if self.is_unlocked() {
            self.notify(character.as_ref(), "Your eye power is already unlocked!");
            return Err(ProgressionError::AlreadyUnlocked);
        }

        let now = env.now_epoch_seconds()?;
        self.tier = EyeTier::Tier1;
        self.experience = 0;

        self.sync_eye_slot(character.as_ref(), env);

        // Unlocking auto-activates.
        self.active = true;
        self.last_activation = now;

        self.notify(
            character.as_ref(),
            "Congratulations! You unlocked your eye power at Tier 1!",
        );
        self.notify(character.as_ref(), "Eye power activated automatically!");
        tracing::info!(
            "[LevelProgression] character {} unlocked and activated eye power",
            character.name()
        );

        Ok(())
    }

    /// Activates the eye power, granting usage experience and starting the
    /// character's strain gauge at the seed for the current tier.
    pub fn activate(&mut self, env: &SystemEnv<'_>) -> Result<(), ProgressionError> {
        let character = self.resolve()?;

        if !self.is_unlocked() {
            self.notify(character.as_ref(), "You must unlock your eye power first!");
            return Err(ProgressionError::Locked);
        }

        if self.active {
            self.notify(character.as_ref(), "Your eye power is already active!");
            return Err(ProgressionError::AlreadyActive);
        }

        if !self.can_activate() {
            self.notify(
                character.as_ref(),
                "You cannot activate your eye power right now!",
            );
            return Err(ProgressionError::ActivationBlocked);
        }

        let now = env.now_epoch_seconds()?;
        self.active = true;
        self.last_activation = now;
        self.increment_usage();

        if let Some(sink) = character.strain_sink() {
            sink.set_level_dependency(self.level_number());
            sink.begin_growth(env);
        }

        self.notify(
            character.as_ref(),
            "Eye power activated! Your eyes glow with power.",
        );
        tracing::info!(
            "[LevelProgression] character {} activated eye power at {}",
            character.name(),
            self.tier.label()
        );

        Ok(())
    }

    /// Deactivates the eye power and halts the character's strain gauge.
    pub fn deactivate(&mut self, env: &SystemEnv<'_>) -> Result<(), ProgressionError> {
        let character = self.resolve()?;

        if !self.active {
            self.notify(character.as_ref(), "Your eye power is already inactive!");
            return Err(ProgressionError::NotActive);
        }

        self.active = false;

        if let Some(sink) = character.strain_sink() {
            sink.halt_growth(env);
        }

        self.notify(character.as_ref(), "Eye power deactivated.");
        tracing::info!(
            "[LevelProgression] character {} deactivated eye power",
            character.name()
        );

        Ok(())
    }

    /// Advances one tier when the experience threshold is met.
    ///
    /// On insufficient experience the error carries the exact remaining
    /// amount, and the character is told how much is missing.
    pub fn increase_level(&mut self, env: &SystemEnv<'_>) -> Result<(), ProgressionError> {
        let character = self.resolve()?;

        if !self.is_unlocked() {
            self.notify(character.as_ref(), "You must unlock your eye power first!");
            return Err(ProgressionError::Locked);
        }

        let Some(next) = self.tier.next() else {
            self.notify(
                character.as_ref(),
                "Your eye power is already at the maximum tier!",
            );
            return Err(ProgressionError::MaxTier);
        };

        if !self.can_evolve() {
            let needed = next.required_experience().saturating_sub(self.experience);
            self.notify(
                character.as_ref(),
                &format!("You need {needed} more experience points to evolve!"),
            );
            return Err(ProgressionError::InsufficientExperience { needed });
        }

        let old = self.tier;
        self.tier = next;

        self.sync_eye_slot(character.as_ref(), env);

        // A running gauge snaps to the new tier immediately instead of
        // drifting there over successive growth ticks.
        if self.active
            && let Some(sink) = character.strain_sink()
        {
            sink.set_level_dependency(self.level_number());
        }

        self.notify(
            character.as_ref(),
            &format!(
                "Your eye power evolved from {} to {}!",
                old.label(),
                self.tier.label()
            ),
        );
        tracing::info!(
            "[LevelProgression] character {} evolved eye power from {} to {}",
            character.name(),
            old.label(),
            self.tier.label()
        );

        Ok(())
    }

    /// Adds experience with saturation; never auto-evolves.
    pub fn add_experience(&mut self, amount: u32) -> Result<(), ProgressionError> {
        let character = self.resolve()?;

        if amount == 0 {
            return Err(ProgressionError::ZeroAmount);
        }

        if !self.is_unlocked() {
            tracing::debug!(
                "[LevelProgression] ignored experience for locked eye power of character {}",
                character.name()
            );
            return Err(ProgressionError::Locked);
        }

        self.experience = self.experience.saturating_add(amount);

        self.notify(
            character.as_ref(),
            &format!("You gained {amount} eye power experience points!"),
        );
        if self.can_evolve() {
            self.notify(character.as_ref(), "Your eye power is ready to evolve!");
        }

        Ok(())
    }

    /// Single-button toggle bound to the eye item: deactivate when active,
    /// activate when inactive, reject when locked.
    pub fn toggle(&mut self, env: &SystemEnv<'_>) -> Result<(), ProgressionError> {
        let character = self.resolve()?;

        if !self.is_unlocked() {
            self.notify(character.as_ref(), "You have not unlocked your eye power.");
            return Err(ProgressionError::Locked);
        }

        if self.active {
            self.deactivate(env)
        } else {
            self.activate(env)
        }
    }

    fn increment_usage(&mut self) {
        self.usage_count = self.usage_count.saturating_add(1);

        // Each use grants a small fixed experience reward.
        if self.is_unlocked() {
            let _ = self.add_experience(OcularConfig::USAGE_EXPERIENCE);
        }
    }

    // ===== persistence accessors =====

    /// Restores the tier from its persisted numeric form, clamping out-of-range
    /// values and keeping the locked-implies-inactive invariant.
    pub fn set_level_number(&mut self, raw: u8) {
        let clamped = if raw > EyeTier::MAX.number() {
            tracing::warn!(
                "[LevelProgression] persisted tier {} out of range, clamping to {}",
                raw,
                EyeTier::MAX.number()
            );
            EyeTier::MAX.number()
        } else {
            raw
        };
        // from_number cannot fail after clamping
        self.tier = EyeTier::from_number(clamped).unwrap_or(EyeTier::MAX);
        if self.tier == EyeTier::Locked {
            self.active = false;
        }
    }

    pub fn set_experience(&mut self, experience: u32) {
        self.experience = experience;
    }

    pub fn set_usage_count(&mut self, usage_count: u32) {
        self.usage_count = usage_count;
    }

    // ===== eye slot sync =====

    /// Populates an empty eye slot with the item for the current tier.
    fn ensure_eye_slot(&self, character: &dyn Character, env: &SystemEnv<'_>) {
        if character.eye_slot_item().is_some() {
            return;
        }
        self.place_eye_item(character, env);
    }

    /// Replaces the eye-slot item when its id no longer matches the tier.
    fn sync_eye_slot(&self, character: &dyn Character, env: &SystemEnv<'_>) {
        let expected = self.tier.item_id();
        match character.eye_slot_item() {
            Some(current) if current == expected => {}
            Some(_) => {
                character.clear_eye_slot();
                self.place_eye_item(character, env);
            }
            None => self.place_eye_item(character, env),
        }
    }

    fn place_eye_item(&self, character: &dyn Character, env: &SystemEnv<'_>) {
        let expected = self.tier.item_id();
        let Ok(items) = env.items() else {
            tracing::warn!(
                "[LevelProgression] no item oracle, skipping eye slot sync for character {}",
                character.name()
            );
            return;
        };
        if let Some(item) = items.create_item(expected) {
            character.set_eye_slot_item(item);
            tracing::debug!(
                "[LevelProgression] eye slot of character {} now holds item {}",
                character.name(),
                expected
            );
        }
    }
}

/// The gauge-facing view of a shared, interiorly-mutable progression.
impl LevelSource for RefCell<LevelProgression> {
    fn is_active(&self) -> bool {
        self.borrow().is_active()
    }

    fn level_number(&self) -> u8 {
        self.borrow().level_number()
    }
}

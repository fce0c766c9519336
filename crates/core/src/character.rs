//! The owning-character boundary.
//!
//! Both systems hold a non-owning reference to their character and resolve it
//! at the start of every public operation. The trait is deliberately narrow:
//! identity, outbound notices, the eye equipment slot, and the two capability
//! interfaces the systems use to reach each other without a stored reference.

use std::rc::Rc;

use crate::env::SystemEnv;
use crate::types::{ItemHandle, ItemId};

/// Category attached to outbound text messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoticeCategory {
    /// Routine status updates.
    Status,
    /// Urgent condition the player should react to.
    Warning,
}

/// Narrow accessor for the character that owns a component pair.
///
/// Components store `Weak<dyn Character>` and upgrade per call; the strong
/// handle lives only for the duration of one operation and never extends the
/// character's lifetime.
pub trait Character {
    /// Character name, used for notices and log keys.
    fn name(&self) -> &str;

    /// Sends a user-facing text message. Informational only.
    fn send_notice(&self, category: NoticeCategory, text: &str);

    /// Identifier of the item currently held in the eye slot, if any.
    fn eye_slot_item(&self) -> Option<ItemId>;

    /// Places a spawned item into the eye slot, replacing any previous one.
    fn set_eye_slot_item(&self, item: ItemHandle);

    /// Empties the eye slot, returning the removed item to the world service.
    fn clear_eye_slot(&self);

    /// The level progression driving this character's strain gauge.
    ///
    /// Returns `None` while the pair is still being wired up; the gauge then
    /// treats the driver as absent and shuts itself down on the next tick.
    fn level_source(&self) -> Option<Rc<dyn LevelSource>>;

    /// The strain gauge parameterized by this character's level progression.
    fn strain_sink(&self) -> Option<Rc<dyn StrainSink>>;
}

/// Capability interface the strain gauge reads from its driver.
///
/// Expressed as a trait rather than a direct object reference so the gauge
/// can be tested in isolation with a stub level source.
pub trait LevelSource {
    /// Whether the driving system is currently active.
    fn is_active(&self) -> bool;

    /// Current level number of the driving system (0 = locked).
    fn level_number(&self) -> u8;
}

/// Capability interface the level progression notifies on transitions.
///
/// Redundant transitions (starting an already-growing gauge, halting an idle
/// one) are absorbed silently; the driver does not care.
pub trait StrainSink {
    /// Snaps the gauge to the seed value for the given driver level.
    fn set_level_dependency(&self, level: u8);

    /// Starts gauge growth, stamping the activation time from the clock.
    fn begin_growth(&self, env: &SystemEnv<'_>);

    /// Stops gauge growth, stamping the deactivation time from the clock.
    fn halt_growth(&self, env: &SystemEnv<'_>);
}

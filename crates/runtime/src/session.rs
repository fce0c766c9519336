//! Per-loop orchestration of character component pairs.
//!
//! A [`Session`] owns every character of one game-loop thread and forwards
//! the periodic tick plus user commands to the components. Cross-character
//! isolation is total: no component ever reads another character's state, so
//! no locking is needed anywhere in this model.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use ocular_core::{ClockOracle, ComponentError, SystemEnv};

use crate::character::GameCharacter;
use crate::error::{Result, RuntimeError};
use crate::providers::ItemCatalog;

/// Unique identifier for a character registered with a session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registry and tick driver for the characters of one loop thread.
pub struct Session {
    clock: Box<dyn ClockOracle>,
    items: ItemCatalog,
    characters: BTreeMap<CharacterId, Rc<GameCharacter>>,
    next_id: u32,
}

impl Session {
    pub fn new(clock: Box<dyn ClockOracle>) -> Self {
        Self {
            clock,
            items: ItemCatalog::default(),
            characters: BTreeMap::new(),
            next_id: 0,
        }
    }

    fn env(&self) -> SystemEnv<'_> {
        SystemEnv::with_all(self.clock.as_ref(), &self.items)
    }

    /// Creates and registers a character, binding its component pair.
    pub fn spawn_character(&mut self, name: impl Into<String>) -> CharacterId {
        let id = CharacterId(self.next_id);
        self.next_id += 1;
        let character = GameCharacter::spawn(name, &self.env());
        tracing::info!("[Session] registered character {} as {}", character.name(), id);
        self.characters.insert(id, character);
        id
    }

    /// Unregisters a character; any still-pending tick fails safely through
    /// the components' weak back-references.
    pub fn remove_character(&mut self, id: CharacterId) -> Option<Rc<GameCharacter>> {
        self.characters.remove(&id)
    }

    pub fn character(&self, id: CharacterId) -> Option<&Rc<GameCharacter>> {
        self.characters.get(&id)
    }

    fn resolve(&self, id: CharacterId) -> Result<&Rc<GameCharacter>> {
        self.characters
            .get(&id)
            .ok_or(RuntimeError::UnknownCharacter(id))
    }

    /// Runs one simulation step for every registered character.
    ///
    /// Must be called at least once per second: the gauges advance by at most
    /// one unit per timer per call, with no catch-up for missed ticks.
    pub fn tick(&self) {
        let env = self.env();
        for character in self.characters.values() {
            if let Err(err) = character.strain().borrow_mut().on_think(&env)
                && !err.severity().is_noop()
            {
                tracing::debug!(
                    "[Session] tick skipped for character {}: {}",
                    character.name(),
                    err
                );
            }
        }
    }

    // ===== user commands =====

    pub fn unlock(&self, id: CharacterId) -> Result<()> {
        let character = self.resolve(id)?;
        character.progression().borrow_mut().unlock(&self.env())?;
        Ok(())
    }

    /// Click on the eye item: single-button activation toggle.
    pub fn toggle_eye(&self, id: CharacterId) -> Result<()> {
        let character = self.resolve(id)?;
        character.progression().borrow_mut().toggle(&self.env())?;
        Ok(())
    }

    pub fn evolve(&self, id: CharacterId) -> Result<()> {
        let character = self.resolve(id)?;
        character
            .progression()
            .borrow_mut()
            .increase_level(&self.env())?;
        Ok(())
    }

    pub fn grant_experience(&self, id: CharacterId, amount: u32) -> Result<()> {
        let character = self.resolve(id)?;
        character.progression().borrow_mut().add_experience(amount)?;
        Ok(())
    }

    pub fn add_strain(&self, id: CharacterId, amount: u8) -> Result<()> {
        let character = self.resolve(id)?;
        character.strain().borrow_mut().add_strain(amount)?;
        Ok(())
    }

    pub fn reduce_strain(&self, id: CharacterId, amount: u8) -> Result<()> {
        let character = self.resolve(id)?;
        character.strain().borrow_mut().reduce_strain(amount)?;
        Ok(())
    }
}

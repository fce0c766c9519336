//! Persistence layer for the per-character scalar fields.
//!
//! The components expose raw getters/setters; this layer turns them into
//! records and stores them. The storage format is owned here, not by the
//! core: repositories handle data that changes during gameplay, while the
//! static tier/item tables live in the core config.
mod error;
mod file;
mod memory;

pub use error::RepositoryError;
pub use file::FileProfileRepo;
pub use memory::InMemoryProfileRepo;

use crate::character::GameCharacter;
use crate::error::Result;
use crate::session::CharacterId;

/// Persisted scalar fields of a level progression.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressionRecord {
    pub tier: u8,
    pub experience: u32,
    pub usage_count: u32,
}

/// Persisted scalar fields of a strain gauge.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StrainRecord {
    pub value: u8,
    pub total_accumulated: u32,
}

/// Everything saved for one character's component pair.
///
/// Activation flags and timestamps are deliberately not persisted: a loaded
/// character comes back with both systems inactive.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub progression: ProgressionRecord,
    pub strain: StrainRecord,
}

impl CharacterRecord {
    /// Reads the persisted fields out of a live character.
    pub fn capture(character: &GameCharacter) -> Self {
        let progression = character.progression().borrow();
        let strain = character.strain().borrow();
        Self {
            name: character.name().to_string(),
            progression: ProgressionRecord {
                tier: progression.level_number(),
                experience: progression.experience(),
                usage_count: progression.usage_count(),
            },
            strain: StrainRecord {
                value: strain.value(),
                total_accumulated: strain.total_accumulated(),
            },
        }
    }

    /// Writes the persisted fields back into a live character.
    pub fn apply(&self, character: &GameCharacter) {
        let mut progression = character.progression().borrow_mut();
        progression.set_level_number(self.progression.tier);
        progression.set_experience(self.progression.experience);
        progression.set_usage_count(self.progression.usage_count);

        let mut strain = character.strain().borrow_mut();
        strain.set_value(self.strain.value);
        strain.set_total_accumulated(self.strain.total_accumulated);
    }
}

/// Repository for character profile persistence.
pub trait ProfileRepository {
    /// Save a profile record indexed by character id.
    fn save(&self, id: CharacterId, record: &CharacterRecord) -> Result<()>;

    /// Load a profile record by character id.
    fn load(&self, id: CharacterId) -> Result<Option<CharacterRecord>>;

    /// Check if a record exists.
    fn exists(&self, id: CharacterId) -> bool;

    /// Delete a record.
    fn delete(&self, id: CharacterId) -> Result<()>;

    /// List all stored character ids.
    fn list_ids(&self) -> Result<Vec<CharacterId>> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use ocular_core::SystemEnv;

    use super::*;
    use crate::providers::{FixedClock, ItemCatalog};

    #[test]
    fn capture_and_apply_round_trip_through_raw_accessors() {
        let clock = FixedClock::at(0);
        let items = ItemCatalog::default();
        let env = SystemEnv::with_all(&clock, &items);

        let source = GameCharacter::spawn("Izuna", &env);
        source.progression().borrow_mut().unlock(&env).unwrap();
        source.progression().borrow_mut().add_experience(1500).unwrap();
        source.strain().borrow_mut().activate(&env).unwrap();
        source.strain().borrow_mut().add_strain(40).unwrap();

        let record = CharacterRecord::capture(&source);
        assert_eq!(record.progression.tier, 1);
        assert_eq!(record.progression.experience, 1500);
        assert_eq!(record.strain.value, 40);

        let restored = GameCharacter::spawn("Izuna", &env);
        record.apply(&restored);

        let progression = restored.progression().borrow();
        assert_eq!(progression.level_number(), 1);
        assert_eq!(progression.experience(), 1500);
        // Activation state is runtime-only and comes back cleared.
        assert!(!progression.is_active());
        assert_eq!(restored.strain().borrow().value(), 40);
    }
}

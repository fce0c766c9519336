//! In-memory ProfileRepository implementation for tests and local runs.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::repository::{CharacterRecord, ProfileRepository};
use crate::session::CharacterId;

/// In-memory implementation of ProfileRepository.
///
/// Stores records indexed by character id. Interior mutability keeps the
/// trait surface identical to the file-backed variant.
#[derive(Default)]
pub struct InMemoryProfileRepo {
    records: RefCell<BTreeMap<CharacterId, CharacterRecord>>,
}

impl InMemoryProfileRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for InMemoryProfileRepo {
    fn save(&self, id: CharacterId, record: &CharacterRecord) -> Result<()> {
        self.records.borrow_mut().insert(id, record.clone());
        Ok(())
    }

    fn load(&self, id: CharacterId) -> Result<Option<CharacterRecord>> {
        Ok(self.records.borrow().get(&id).cloned())
    }

    fn exists(&self, id: CharacterId) -> bool {
        self.records.borrow().contains_key(&id)
    }

    fn delete(&self, id: CharacterId) -> Result<()> {
        self.records.borrow_mut().remove(&id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<CharacterId>> {
        Ok(self.records.borrow().keys().copied().collect())
    }
}

use crate::types::{ItemHandle, ItemId};

/// Item factory collaborator, used only for eye-slot population.
pub trait ItemOracle {
    /// Spawns an item for the given definition id.
    ///
    /// Returns `None` when the id is unknown to the world service; callers
    /// treat that as a skipped slot sync, never an error.
    fn create_item(&self, id: ItemId) -> Option<ItemHandle>;
}

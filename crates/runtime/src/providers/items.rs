use ocular_core::{EyeTier, ItemHandle, ItemId, ItemOracle};

/// Item factory backed by the table of known eye items.
///
/// Stands in for the world/item-creation service; only the ids referenced by
/// the tier table can be spawned.
#[derive(Clone, Debug)]
pub struct ItemCatalog {
    known: Vec<ItemId>,
}

impl ItemCatalog {
    pub fn new(known: Vec<ItemId>) -> Self {
        Self { known }
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new(vec![
            EyeTier::Locked.item_id(),
            EyeTier::Tier1.item_id(),
            EyeTier::Tier2.item_id(),
            EyeTier::Tier3.item_id(),
        ])
    }
}

impl ItemOracle for ItemCatalog {
    fn create_item(&self, id: ItemId) -> Option<ItemHandle> {
        if self.known.contains(&id) {
            Some(ItemHandle::new(id))
        } else {
            tracing::debug!("[ItemCatalog] refused to create unknown item {id}");
            None
        }
    }
}

//! Concrete oracle implementations supplied to component operations.
mod clock;
mod items;

pub use clock::{FixedClock, SystemClock};
pub use items::ItemCatalog;

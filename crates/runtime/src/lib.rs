//! Orchestration glue around `ocular-core`.
//!
//! Provides a concrete character implementation, the system clock and item
//! catalog providers, a per-character tick driver ([`Session`]), and the
//! repository layer that persists the scalar fields of both systems. The
//! whole crate follows the single-threaded cooperative model of a game loop:
//! characters are `Rc`-owned and updated exclusively from the loop thread.
pub mod character;
pub mod error;
pub mod providers;
pub mod repository;
pub mod session;

pub use character::{GameCharacter, Notice};
pub use error::{Result, RuntimeError};
pub use providers::{FixedClock, ItemCatalog, SystemClock};
pub use repository::{
    CharacterRecord, FileProfileRepo, InMemoryProfileRepo, ProfileRepository, ProgressionRecord,
    RepositoryError, StrainRecord,
};
pub use session::{CharacterId, Session};

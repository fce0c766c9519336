//! Per-character eye-power progression and strain simulation.
//!
//! `ocular-core` defines two coupled state machines owned one-per-character
//! by a game server: [`LevelProgression`] (tiered eye power, experience-gated
//! advancement, toggle activation) and [`StrainGauge`] (a bounded 0-100 gauge
//! whose growth cadence is driven by the progression's current tier). All
//! collaborators (the owning character, the clock, the item factory) are
//! reached through narrow traits so both components stay deterministic and
//! testable in isolation.
pub mod character;
pub mod config;
pub mod env;
pub mod error;
pub mod progression;
pub mod strain;
pub mod types;

pub use character::{Character, LevelSource, NoticeCategory, StrainSink};
pub use config::OcularConfig;
pub use env::{ClockOracle, ItemOracle, OracleError, SystemEnv};
pub use error::{ComponentError, ErrorSeverity};
pub use progression::{LevelProgression, ProgressionError};
pub use strain::{StrainError, StrainGauge};
pub use types::{EyeTier, ItemHandle, ItemId, StrainBand};

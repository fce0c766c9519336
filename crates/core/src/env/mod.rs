//! Traits describing the external collaborators both systems depend on.
//!
//! Oracles supply wall-clock time and item creation. The [`SystemEnv`]
//! aggregate bundles them so component operations can reach everything they
//! need without hard coupling to concrete implementations; tests inject a
//! fixed clock and a stub item factory.
mod clock;
mod error;
mod items;

pub use clock::ClockOracle;
pub use error::OracleError;
pub use items::ItemOracle;

/// Aggregates the read-only oracles required by component operations.
#[derive(Clone, Copy)]
pub struct SystemEnv<'a> {
    clock: Option<&'a dyn ClockOracle>,
    items: Option<&'a dyn ItemOracle>,
}

impl<'a> SystemEnv<'a> {
    pub fn new(clock: Option<&'a dyn ClockOracle>, items: Option<&'a dyn ItemOracle>) -> Self {
        Self { clock, items }
    }

    pub fn with_all(clock: &'a dyn ClockOracle, items: &'a dyn ItemOracle) -> Self {
        Self::new(Some(clock), Some(items))
    }

    pub fn empty() -> Self {
        Self {
            clock: None,
            items: None,
        }
    }

    /// Returns the ClockOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClockNotAvailable` if no clock oracle was provided.
    pub fn clock(&self) -> Result<&'a dyn ClockOracle, OracleError> {
        self.clock.ok_or(OracleError::ClockNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Current wall-clock time from the clock oracle.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClockNotAvailable` if no clock oracle was provided.
    pub fn now_epoch_seconds(&self) -> Result<u64, OracleError> {
        Ok(self.clock()?.now_epoch_seconds())
    }
}

//! Common error infrastructure shared by both components.
//!
//! Domain-specific errors (`ProgressionError`, `StrainError`) are defined in
//! their respective modules alongside the operations they guard. This module
//! provides the severity classification used by callers to decide whether a
//! failure is a benign no-op, a rejected transition, or a broken binding.

/// Severity level of a component error.
///
/// No failure in this crate is fatal: every operation returns a `Result`,
/// leaves state untouched on failure, and never panics. Severity tells the
/// orchestrator how to react.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Benign no-op: zero amounts, already-at-bound operations. Safe to ignore.
    NoOp,

    /// A transition guard failed (already active, insufficient experience,
    /// locked system). The character has usually been sent a notice.
    Precondition,

    /// The owning character reference could not be resolved. Silent failure;
    /// expected during teardown when a deferred tick outlives the character.
    Binding,

    /// A required collaborator (clock, item factory) was not provided.
    Oracle,
}

impl ErrorSeverity {
    /// Returns a human-readable name for this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoOp => "no-op",
            Self::Precondition => "precondition",
            Self::Binding => "binding",
            Self::Oracle => "oracle",
        }
    }

    /// Returns true if this failure can simply be ignored by the caller.
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Returns true if the caller attempted a transition whose guard failed.
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition)
    }
}

/// Common trait for component error enums.
///
/// Implementors use `#[derive(thiserror::Error)]` for Display/Error and
/// classify each variant here for recovery strategies and logging priority.
pub trait ComponentError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::OracleError;
    use crate::progression::ProgressionError;
    use crate::strain::StrainError;

    #[test]
    fn representative_errors_classify_as_expected() {
        assert!(ProgressionError::ZeroAmount.severity().is_noop());
        assert!(StrainError::Inactive.severity().is_noop());

        assert!(
            ProgressionError::InsufficientExperience { needed: 500 }
                .severity()
                .is_precondition()
        );
        assert!(StrainError::AlreadyActive.severity().is_precondition());

        assert_eq!(
            ProgressionError::CharacterGone.severity(),
            ErrorSeverity::Binding
        );
        assert_eq!(
            StrainError::Oracle(OracleError::ClockNotAvailable).severity(),
            ErrorSeverity::Oracle
        );
    }

    #[test]
    fn error_codes_name_the_component_and_variant() {
        assert_eq!(
            ProgressionError::Locked.error_code(),
            "PROGRESSION_LOCKED"
        );
        assert_eq!(StrainError::NotActive.error_code(), "STRAIN_NOT_ACTIVE");
        assert_eq!(ErrorSeverity::Binding.as_str(), "binding");
    }
}

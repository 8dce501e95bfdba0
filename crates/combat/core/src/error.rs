//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (`StatError`, `TrackerError`, `CombatError`) live next
//! to the code that raises them. This module holds what they share: a severity
//! classification and the [`CalcError`] trait.
//!
//! Every error in this crate describes a programmer or data problem (bad
//! identifier, malformed table, incomplete modifier catalog). Nothing is
//! retried; a calculation aborts on the first error and never returns a
//! partial result.

/// Severity level of an error.
///
/// - **Validation**: malformed input that the caller could have rejected up front
/// - **Internal**: a broken contract inside the pipeline (distribution misuse,
///   a missing max-hit source)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not be retried without changes.
    ///
    /// Examples: unknown boost name, wrong-length bonus list, illegal vertex
    Validation,

    /// Unexpected pipeline state.
    ///
    /// Examples: mismatched multi-hit width, no base max hit for a magic attack
    Internal,
}

impl ErrorSeverity {
    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who is at fault (caller input vs. pipeline contract)
pub trait CalcError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    ///
    /// Useful for error categorization and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

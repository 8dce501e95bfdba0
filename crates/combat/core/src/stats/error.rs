//! Stat aggregation errors.

use crate::error::{CalcError, ErrorSeverity};

/// Errors raised while aggregating bonuses, levels, boosts and prayers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatError {
    /// Malformed static input (wrong-length bonus list, illegal slot layout, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Boost name is unknown or has no definition in the loaded table.
    #[error("unknown boost '{0}'")]
    UnknownBoost(String),

    /// Prayer name is unknown or has no definition in the loaded table.
    #[error("unknown prayer '{0}'")]
    UnknownPrayer(String),

    /// Two active prayers both assign a multiplier to the same stat.
    #[error("prayer '{prayer}' conflicts with another active prayer on {stat}")]
    ConflictingPrayer { prayer: String, stat: &'static str },
}

impl StatError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl CalcError for StatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use StatError::*;
        match self {
            Validation(_) => "STAT_VALIDATION",
            UnknownBoost(_) => "STAT_UNKNOWN_BOOST",
            UnknownPrayer(_) => "STAT_UNKNOWN_PRAYER",
            ConflictingPrayer { .. } => "STAT_CONFLICTING_PRAYER",
        }
    }
}

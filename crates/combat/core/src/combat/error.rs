//! Error types for the combat pipeline.

use crate::error::{CalcError, ErrorSeverity};
use crate::stats::StatError;

/// Contract violations of the [`HitTracker`](super::HitTracker).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TrackerError {
    #[error("damage must be non-negative, got {0}")]
    InvalidDamage(i32),

    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("multi-hit store requires at least one hit")]
    EmptyHitList,

    #[error("tracker holds {expected} parallel hits, store supplied {actual}")]
    MismatchedHitCount { expected: usize, actual: usize },
}

impl CalcError for TrackerError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDamage(_) => "TRACKER_INVALID_DAMAGE",
            Self::InvalidProbability(_) => "TRACKER_INVALID_PROBABILITY",
            Self::EmptyHitList => "TRACKER_EMPTY_HIT_LIST",
            Self::MismatchedHitCount { .. } => "TRACKER_MISMATCHED_HIT_COUNT",
        }
    }
}

/// Errors surfaced by [`calculate`](super::calculate).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CombatError {
    #[error("invalid vertex: {0}")]
    InvalidVertex(String),

    #[error("unknown spell '{0}'")]
    UnknownSpell(String),

    /// A spell-less magic attack with no modifier supplying a base max hit.
    #[error("no base max hit for magic attack with '{weapon}'")]
    NoBaseMaxHit { weapon: String },

    #[error(transparent)]
    Stat(#[from] StatError),

    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

impl CombatError {
    pub(crate) fn invalid_vertex(message: impl Into<String>) -> Self {
        Self::InvalidVertex(message.into())
    }
}

impl CalcError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidVertex(_) | Self::UnknownSpell(_) => ErrorSeverity::Validation,
            Self::NoBaseMaxHit { .. } => ErrorSeverity::Internal,
            Self::Stat(err) => err.severity(),
            Self::Tracker(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidVertex(_) => "COMBAT_INVALID_VERTEX",
            Self::UnknownSpell(_) => "COMBAT_UNKNOWN_SPELL",
            Self::NoBaseMaxHit { .. } => "COMBAT_NO_BASE_MAX_HIT",
            Self::Stat(err) => err.error_code(),
            Self::Tracker(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_classification() {
        let stat = CombatError::from(StatError::validation("bad slot"));
        assert_eq!(stat.severity(), ErrorSeverity::Validation);
        assert_eq!(stat.error_code(), "STAT_VALIDATION");

        let tracker = CombatError::from(TrackerError::EmptyHitList);
        assert!(tracker.severity().is_internal());
        assert_eq!(tracker.error_code(), "TRACKER_EMPTY_HIT_LIST");

        let no_max_hit = CombatError::NoBaseMaxHit {
            weapon: "Unarmed".into(),
        };
        assert!(no_max_hit.severity().is_internal());
        assert!(!CombatError::UnknownSpell("Fire Wave".into()).severity().is_internal());
    }
}

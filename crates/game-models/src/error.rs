//! Error types for the game engine and the life-expectancy estimator

use thiserror::Error;

/// Validation failures raised by the game models.
///
/// Numeric amounts are clamped rather than rejected, so these only
/// surface for structural misuse: bad indices, unknown strategy ids,
/// malformed allocations and out-of-domain construction parameters.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    #[error("action index {index} out of range for {game} (expected < {options})")]
    InvalidAction {
        game: &'static str,
        index: usize,
        options: usize,
    },

    #[error("unknown {role} strategy {id} for {game}")]
    InvalidStrategy {
        game: &'static str,
        role: &'static str,
        id: u8,
    },

    #[error("invalid allocation: {0}")]
    InvalidAllocation(String),

    #[error("expected {expected} contributions, got {got}")]
    ContributionCount { expected: usize, got: usize },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Failures while loading or querying the country reference table.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("country '{0}' not found in reference table")]
    CountryNotFound(String),

    #[error("reference table has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("malformed reference table at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("unknown gender '{0}'")]
    UnknownGender(String),

    #[error("unknown medical condition '{0}'")]
    UnknownCondition(String),

    #[error("invalid noise distribution: {0}")]
    Noise(#[from] rand_distr::NormalError),

    #[error("failed to read reference table: {0}")]
    Io(#[from] std::io::Error),
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), GameError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GameError::InvalidParameter {
            name,
            reason: format!("must be finite, got {}", value),
        })
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), GameError> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(GameError::InvalidParameter {
            name,
            reason: format!("must be non-negative, got {}", value),
        });
    }
    Ok(())
}

pub(crate) fn ensure_unit_interval(name: &'static str, value: f64) -> Result<(), GameError> {
    ensure_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(GameError::InvalidParameter {
            name,
            reason: format!("must lie in [0, 1], got {}", value),
        });
    }
    Ok(())
}

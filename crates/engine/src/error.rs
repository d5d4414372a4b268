//! The module contains the error the engine can throw.
//!
//! Validation failures carry the exact message shown to the caller:
//!
//! - [`InvalidTitle`], [`InvalidAmount`] and [`InvalidDate`] when a field
//!   breaks its rule.
//! - [`InvalidText`] when an optional text field holds a list or an object.
//! - [`KeyNotFound`] when no expense matches the requested id.
//!
//!  [`InvalidTitle`]: EngineError::InvalidTitle
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`InvalidText`]: EngineError::InvalidText
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    InvalidTitle(String),
    #[error("{0}")]
    InvalidAmount(String),
    #[error("{0}")]
    InvalidDate(String),
    #[error("{0}")]
    InvalidText(String),
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    pub(crate) fn expense_not_found() -> Self {
        Self::KeyNotFound("Expense".to_string())
    }

    /// Whether the caller can fix the error by changing the request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTitle(_)
                | Self::InvalidAmount(_)
                | Self::InvalidDate(_)
                | Self::InvalidText(_)
        )
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidTitle(a), Self::InvalidTitle(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidDate(a), Self::InvalidDate(b)) => a == b,
            (Self::InvalidText(a), Self::InvalidText(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_reads_as_sentence() {
        assert_eq!(
            EngineError::expense_not_found().to_string(),
            "Expense not found"
        );
    }

    #[test]
    fn only_field_errors_are_validation() {
        assert!(EngineError::InvalidDate("Invalid date format".to_string()).is_validation());
        assert!(EngineError::InvalidText("Location must be text".to_string()).is_validation());
        assert!(!EngineError::expense_not_found().is_validation());
        assert!(!EngineError::Database(DbErr::Custom("boom".to_string())).is_validation());
    }
}

//! Validation and persistence for expense records.
//!
//! [`Engine`] owns the database connection and exposes the four operations
//! the API is built on: create, list, update and delete. Every operation
//! validates its input before touching storage.

pub use error::EngineError;
pub use expenses::Expense;
pub use ops::{Engine, EngineBuilder};
pub use validation::ExpenseFields;

mod error;
mod expenses;
mod ops;
mod validation;

type ResultEngine<T> = Result<T, EngineError>;

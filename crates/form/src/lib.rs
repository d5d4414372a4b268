//! Client-side expense form.
//!
//! The form is modelled as plain data: [`FormState`] holds the field values,
//! the per-field errors and the submitting flag, and every change goes
//! through [`FormState::reduce`]. [`ExpenseForm`] drives those transitions
//! and hands valid expenses to an injected [`Submitter`].

pub use client::HttpSubmitter;
pub use fields::{Field, FormValues, Receipt};
pub use form::{ExpenseForm, SubmitOutcome};
pub use state::{Action, FormState};
pub use submit::{DelaySubmitter, SubmitError, Submitter};
pub use validate::{FieldErrors, validate};

mod client;
mod fields;
mod form;
mod state;
mod submit;
mod validate;

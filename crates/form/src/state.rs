use chrono::NaiveDate;

use crate::{
    fields::{Field, FormValues, Receipt},
    validate::{FieldErrors, validate},
};

/// Everything the form renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub submitting: bool,
    /// Message of the last rejected submission, if any.
    pub submit_error: Option<String>,
}

/// A change to the form.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace a text field and clear its error.
    Edit(Field, String),
    AttachReceipt(Option<Receipt>),
    /// Recompute the error map from the current values.
    Validate,
    SubmitStarted,
    /// Back to an empty form, with the date set to `today`.
    SubmitSucceeded { today: NaiveDate },
    /// Keep the values so the user can retry.
    SubmitFailed(String),
    Reset { today: NaiveDate },
}

impl FormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            values: FormValues::new(today),
            errors: FieldErrors::new(),
            submitting: false,
            submit_error: None,
        }
    }

    /// Next state after `action`. `self` is left untouched.
    pub fn reduce(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::Edit(field, value) => {
                next.values.set(field, value);
                next.errors.remove(&field);
            }
            Action::AttachReceipt(receipt) => {
                next.values.receipt = receipt;
                next.errors.remove(&Field::Receipt);
            }
            Action::Validate => {
                next.errors = validate(&next.values);
            }
            Action::SubmitStarted => {
                next.submitting = true;
                next.submit_error = None;
            }
            Action::SubmitSucceeded { today } | Action::Reset { today } => {
                next = Self::new(today);
            }
            Action::SubmitFailed(message) => {
                next.submitting = false;
                next.submit_error = Some(message);
            }
        }
        next
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && validate(&self.values).is_empty()
    }
}

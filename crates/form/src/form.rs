use api_types::expense::ExpenseCreated;
use chrono::{NaiveDate, Utc};

use crate::{
    fields::{Field, Receipt},
    state::{Action, FormState},
    submit::{SubmitError, Submitter},
    validate::FieldErrors,
};

/// Result of [`ExpenseForm::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Blocked(FieldErrors),
    Submitted(ExpenseCreated),
    Failed(SubmitError),
}

/// The expense form bound to a submitter.
///
/// `submit` borrows the form mutably until the submitter answers, so two
/// submissions can never overlap.
pub struct ExpenseForm<S> {
    state: FormState,
    submitter: S,
    today: fn() -> NaiveDate,
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

impl<S: Submitter> ExpenseForm<S> {
    pub fn new(submitter: S) -> Self {
        Self::with_clock(submitter, utc_today)
    }

    /// Like [`ExpenseForm::new`] with a custom source for the default date.
    pub fn with_clock(submitter: S, today: fn() -> NaiveDate) -> Self {
        Self {
            state: FormState::new(today()),
            submitter,
            today,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(Action::Edit(field, value.into()));
    }

    pub fn attach_receipt(&mut self, receipt: Option<Receipt>) {
        self.dispatch(Action::AttachReceipt(receipt));
    }

    pub fn reset(&mut self) {
        self.dispatch(Action::Reset {
            today: (self.today)(),
        });
    }

    /// Validate, then hand the expense to the submitter.
    ///
    /// On success the form is cleared; on failure the values are kept and
    /// the message is stored in [`FormState::submit_error`].
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.dispatch(Action::Validate);
        if !self.state.errors.is_empty() {
            tracing::debug!("submission blocked by {} field errors", self.state.errors.len());
            return SubmitOutcome::Blocked(self.state.errors.clone());
        }
        let Some(expense) = self.state.values.to_expense_new() else {
            return SubmitOutcome::Blocked(self.state.errors.clone());
        };

        self.dispatch(Action::SubmitStarted);
        match self.submitter.submit(expense).await {
            Ok(created) => {
                tracing::info!("expense {} submitted", created.id);
                self.dispatch(Action::SubmitSucceeded {
                    today: (self.today)(),
                });
                SubmitOutcome::Submitted(created)
            }
            Err(err) => {
                tracing::warn!("expense submission failed: {err}");
                self.dispatch(Action::SubmitFailed(err.to_string()));
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.state = self.state.reduce(action);
    }
}

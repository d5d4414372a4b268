use std::{future::Future, time::Duration};

use api_types::expense::{ExpenseCreated, ExpenseNew};
use thiserror::Error;
use uuid::Uuid;

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server refused the expense; the message is meant for the user.
    #[error("{0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Where a valid expense goes when the form is submitted.
pub trait Submitter {
    fn submit(
        &self,
        expense: ExpenseNew,
    ) -> impl Future<Output = Result<ExpenseCreated, SubmitError>> + Send;
}

/// Accepts every expense after a fixed delay without sending it anywhere.
#[derive(Clone, Debug)]
pub struct DelaySubmitter {
    delay: Duration,
}

impl DelaySubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DelaySubmitter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Submitter for DelaySubmitter {
    async fn submit(&self, expense: ExpenseNew) -> Result<ExpenseCreated, SubmitError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!("expense accepted locally: {expense:?}");

        Ok(ExpenseCreated {
            message: "Expense added successfully".to_string(),
            id: Uuid::new_v4(),
        })
    }
}

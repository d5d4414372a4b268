use api_types::{
    ErrorResponse,
    expense::{ExpenseCreated, ExpenseNew},
};
use reqwest::Url;

use crate::submit::{SubmitError, Submitter};

/// Posts expenses to the expense API.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpSubmitter {
    pub fn new(base_url: &str) -> Result<Self, SubmitError> {
        let base_url =
            Url::parse(base_url).map_err(|err| SubmitError::InvalidBaseUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, expense: ExpenseNew) -> Result<ExpenseCreated, SubmitError> {
        let endpoint = self
            .base_url
            .join("expenses")
            .map_err(|err| SubmitError::InvalidBaseUrl(err.to_string()))?;

        let res = self.http.post(endpoint).json(&expense).send().await?;

        if res.status().is_success() {
            return Ok(res.json::<ExpenseCreated>().await?);
        }

        let status = res.status();
        let body = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());

        let err = match status.as_u16() {
            400 => SubmitError::Validation(body),
            _ => SubmitError::Server(body),
        };
        Err(err)
    }
}

//! Field rules shared by create and update.
//!
//! Fields arrive as raw JSON so a wrongly typed value is rejected with the
//! same message as a missing one. Rules run in a fixed order (title, amount,
//! date, then the optional text fields) and the first failure is returned.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::{EngineError, ResultEngine};

const TITLE_MIN_CHARS: usize = 3;

const TITLE_REQUIRED: &str = "Title is required and must be at least 3 characters long";
const AMOUNT_REQUIRED: &str = "Amount is required and must be a number greater than 0";
const DATE_REQUIRED: &str = "Date is required and must be a valid date";

const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters long";
const AMOUNT_NOT_POSITIVE: &str = "Amount must be a number greater than 0";
const DATE_INVALID: &str = "Invalid date format";

const CATEGORY_NOT_TEXT: &str = "Category must be text";
const PAYMENT_METHOD_NOT_TEXT: &str = "Payment method must be text";
const LOCATION_NOT_TEXT: &str = "Location must be text";

/// Largest distance from the epoch a JavaScript `Date` can hold.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Unvalidated expense fields, as received from a client.
///
/// `None` means the field was not supplied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseFields {
    pub title: Option<Value>,
    pub amount: Option<Value>,
    pub category: Option<Value>,
    pub date: Option<Value>,
    pub payment_method: Option<Value>,
    pub location: Option<Value>,
}

#[derive(Debug, PartialEq)]
pub(crate) struct NewExpense {
    pub(crate) title: String,
    pub(crate) amount: f64,
    pub(crate) category: Option<String>,
    pub(crate) date: DateTime<Utc>,
    pub(crate) payment_method: Option<String>,
    pub(crate) location: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct ExpensePatch {
    pub(crate) title: Option<String>,
    pub(crate) amount: Option<f64>,
    pub(crate) category: Option<String>,
    pub(crate) date: Option<DateTime<Utc>>,
    pub(crate) payment_method: Option<String>,
    pub(crate) location: Option<String>,
}

impl ExpensePatch {
    pub(crate) fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ExpenseFields {
    pub(crate) fn validate_new(self) -> ResultEngine<NewExpense> {
        let title = self
            .title
            .as_ref()
            .and_then(parse_title)
            .ok_or_else(|| EngineError::InvalidTitle(TITLE_REQUIRED.to_string()))?;
        let amount = self
            .amount
            .as_ref()
            .and_then(parse_amount)
            .ok_or_else(|| EngineError::InvalidAmount(AMOUNT_REQUIRED.to_string()))?;
        let date = self
            .date
            .as_ref()
            .and_then(parse_date)
            .ok_or_else(|| EngineError::InvalidDate(DATE_REQUIRED.to_string()))?;

        Ok(NewExpense {
            title,
            amount,
            category: parse_text(self.category, CATEGORY_NOT_TEXT)?,
            date,
            payment_method: parse_text(self.payment_method, PAYMENT_METHOD_NOT_TEXT)?,
            location: parse_text(self.location, LOCATION_NOT_TEXT)?,
        })
    }

    pub(crate) fn validate_patch(self) -> ResultEngine<ExpensePatch> {
        let title = self
            .title
            .as_ref()
            .map(|value| {
                parse_title(value)
                    .ok_or_else(|| EngineError::InvalidTitle(TITLE_TOO_SHORT.to_string()))
            })
            .transpose()?;
        let amount = self
            .amount
            .as_ref()
            .map(|value| {
                parse_amount(value)
                    .ok_or_else(|| EngineError::InvalidAmount(AMOUNT_NOT_POSITIVE.to_string()))
            })
            .transpose()?;
        let date = self
            .date
            .as_ref()
            .map(|value| {
                parse_date(value).ok_or_else(|| EngineError::InvalidDate(DATE_INVALID.to_string()))
            })
            .transpose()?;

        Ok(ExpensePatch {
            title,
            amount,
            category: parse_text(self.category, CATEGORY_NOT_TEXT)?,
            date,
            payment_method: parse_text(self.payment_method, PAYMENT_METHOD_NOT_TEXT)?,
            location: parse_text(self.location, LOCATION_NOT_TEXT)?,
        })
    }
}

fn parse_title(value: &Value) -> Option<String> {
    let title = value.as_str()?;
    (title.chars().count() >= TITLE_MIN_CHARS).then(|| title.to_string())
}

fn parse_amount(value: &Value) -> Option<f64> {
    let amount = value.as_f64()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// Strings are kept as sent and other scalars are stored as their JSON text.
fn parse_text(value: Option<Value>, message: &str) -> ResultEngine<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(scalar.to_string())),
        Some(_) => Err(EngineError::InvalidText(message.to_string())),
    }
}

/// Accepts RFC3339 timestamps, dates (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`),
/// date-times with a `T` or a space before the time, with or without an
/// offset (read as UTC when missing), and epoch milliseconds.
fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_date_str(raw.trim()),
        Value::Number(number) => {
            let millis = number
                .as_f64()
                .filter(|ms| ms.is_finite() && ms.abs() <= MAX_EPOCH_MILLIS)?;
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        _ => None,
    }
}

fn parse_date_str(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Some(date) = parse_calendar_date(raw) {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    let zoned = match raw.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{local}+00:00"),
        None => raw.to_string(),
    };
    let with_offset = [
        "%Y-%m-%dT%H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M%:z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M%:z",
    ]
    .iter()
    .find_map(|format| DateTime::parse_from_str(&zoned, format).ok());
    if let Some(date) = with_offset {
        return Some(date.with_timezone(&Utc));
    }

    [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ]
    .iter()
    .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    .map(|dt| dt.and_utc())
}

/// `YYYY-MM-DD`, or a year or year-month meaning its first day.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if !raw.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let padded = match raw.matches('-').count() {
        0 => format!("{raw}-01-01"),
        1 => format!("{raw}-01"),
        2 => raw.to_string(),
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

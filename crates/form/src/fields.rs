use std::{fmt, path::PathBuf};

use api_types::expense::ExpenseNew;
use chrono::NaiveDate;
use serde_json::Value;

/// The inputs of the expense form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Amount,
    Category,
    Description,
    Date,
    PaymentMethod,
    Location,
    Receipt,
}

impl Field {
    /// Input name as used by the form markup and the error map.
    pub fn name(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Description => "description",
            Self::Date => "date",
            Self::PaymentMethod => "paymentMethod",
            Self::Location => "location",
            Self::Receipt => "receipt",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A file picked by the user. Only kept in local state, never uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt(pub PathBuf);

/// Raw form inputs, exactly as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct FormValues {
    pub amount: String,
    pub category: String,
    pub description: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub payment_method: String,
    pub location: String,
    pub receipt: Option<Receipt>,
}

impl FormValues {
    /// Empty form with the date set to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            payment_method: String::new(),
            location: String::new(),
            receipt: None,
        }
    }

    /// Text of a field; the receipt has none.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Amount => &self.amount,
            Field::Category => &self.category,
            Field::Description => &self.description,
            Field::Date => &self.date,
            Field::PaymentMethod => &self.payment_method,
            Field::Location => &self.location,
            Field::Receipt => "",
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Amount => self.amount = value,
            Field::Category => self.category = value,
            Field::Description => self.description = value,
            Field::Date => self.date = value,
            Field::PaymentMethod => self.payment_method = value,
            Field::Location => self.location = value,
            Field::Receipt => {}
        }
    }

    /// Request body for the expense API, or `None` when the amount does not
    /// parse. The description becomes the expense title; the receipt stays
    /// local.
    pub fn to_expense_new(&self) -> Option<ExpenseNew> {
        let amount = parse_amount(&self.amount)?;
        let location = self.location.trim();

        Some(ExpenseNew {
            title: Some(Value::from(self.description.trim())),
            amount: Some(Value::from(amount)),
            category: Some(Value::from(self.category.clone())),
            date: Some(Value::from(self.date.clone())),
            payment_method: Some(Value::from(self.payment_method.clone())),
            location: (!location.is_empty()).then(|| Value::from(location)),
        })
    }
}

/// A finite number strictly greater than zero.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

use std::collections::BTreeMap;

use api_types::expense::{CATEGORIES, PAYMENT_METHODS};

use crate::fields::{Field, FormValues, parse_amount};

/// Message per failing field. Empty means the form may be submitted.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Check every field independently and collect all failures.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if parse_amount(&values.amount).is_none() {
        errors.insert(Field::Amount, "Please enter a valid amount");
    }
    if !CATEGORIES.contains(&values.category.as_str()) {
        errors.insert(Field::Category, "Please select a category");
    }
    if values.description.trim().is_empty() {
        errors.insert(Field::Description, "Please enter a description");
    }
    if values.date.is_empty() {
        errors.insert(Field::Date, "Please select a date");
    }
    if !PAYMENT_METHODS.contains(&values.payment_method.as_str()) {
        errors.insert(Field::PaymentMethod, "Please select a payment method");
    }

    errors
}

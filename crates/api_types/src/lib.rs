use serde::{Deserialize, Serialize};

/// Body returned by every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned by update and delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub mod expense {
    use chrono::{DateTime, Utc};
    use serde_json::Value;

    use super::*;
    use uuid::Uuid;

    /// Labels offered by the expense form's category selector.
    pub const CATEGORIES: [&str; 10] = [
        "Food & Dining",
        "Transportation",
        "Shopping",
        "Entertainment",
        "Bills & Utilities",
        "Healthcare",
        "Travel",
        "Education",
        "Business",
        "Other",
    ];

    /// Labels offered by the expense form's payment method selector.
    pub const PAYMENT_METHODS: [&str; 6] = [
        "Cash",
        "Credit Card",
        "Debit Card",
        "Bank Transfer",
        "Digital Wallet",
        "Check",
    ];

    /// Request body for `POST /expenses`.
    ///
    /// Every field is kept as raw JSON so the server checks types in its own
    /// order and answers a wrongly typed value with its own message.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseNew {
        pub title: Option<Value>,
        pub amount: Option<Value>,
        pub category: Option<Value>,
        /// RFC3339 timestamp, `YYYY-MM-DD` date or epoch milliseconds.
        pub date: Option<Value>,
        pub payment_method: Option<Value>,
        pub location: Option<Value>,
    }

    /// Request body for `PATCH /expenses/{id}`.
    ///
    /// Absent (or `null`) fields are left unchanged.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseUpdate {
        pub title: Option<Value>,
        pub amount: Option<Value>,
        pub category: Option<Value>,
        pub date: Option<Value>,
        pub payment_method: Option<Value>,
        pub location: Option<Value>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub message: String,
        pub id: Uuid,
    }

    /// A stored expense as returned by `GET /expenses`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseView {
        #[serde(rename = "_id")]
        pub id: Uuid,
        pub title: String,
        pub amount: f64,
        pub category: Option<String>,
        pub date: DateTime<Utc>,
        pub payment_method: Option<String>,
        pub location: Option<String>,
    }
}

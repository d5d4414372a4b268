//! Expense records and their storage mapping.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{ExpensePatch, NewExpense};

/// One stored expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: Option<String>,
    pub date: DateTime<Utc>,
    pub payment_method: Option<String>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: Option<String>,
    pub date: DateTimeUtc,
    pub payment_method: Option<String>,
    pub location: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Insert model for a validated expense. The id is assigned here.
    pub(crate) fn from_new(expense: NewExpense) -> Self {
        Self {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(expense.title),
            amount: ActiveValue::Set(expense.amount),
            category: ActiveValue::Set(expense.category),
            date: ActiveValue::Set(expense.date),
            payment_method: ActiveValue::Set(expense.payment_method),
            location: ActiveValue::Set(expense.location),
        }
    }

    /// Update model touching only the columns present in `patch`.
    pub(crate) fn from_patch(id: Uuid, patch: ExpensePatch) -> Self {
        Self {
            id: ActiveValue::Unchanged(id),
            title: set_if(patch.title),
            amount: set_if(patch.amount),
            category: set_if(patch.category.map(Some)),
            date: set_if(patch.date),
            payment_method: set_if(patch.payment_method.map(Some)),
            location: set_if(patch.location.map(Some)),
        }
    }
}

fn set_if<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            amount: model.amount,
            category: model.category,
            date: model.date,
            payment_method: model.payment_method,
            location: model.location,
        }
    }
}

use sea_orm::{TransactionTrait, prelude::*};

use crate::{EngineError, Expense, ExpenseFields, ResultEngine, expenses};

use super::{Engine, parse_expense_id, with_tx};

impl Engine {
    /// Validate and store a new expense. The stored record gets a fresh id.
    pub async fn create_expense(&self, fields: ExpenseFields) -> ResultEngine<Expense> {
        let expense = fields.validate_new()?;
        let model = expenses::ActiveModel::from_new(expense)
            .insert(&self.database)
            .await?;
        Ok(Expense::from(model))
    }

    /// Every stored expense, in storage order.
    pub async fn list_expenses(&self) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find().all(&self.database).await?;
        Ok(models.into_iter().map(Expense::from).collect())
    }

    /// Apply the supplied fields to an existing expense.
    ///
    /// Fields are validated before the lookup, so an invalid body is reported
    /// even when the id does not exist. An empty patch only checks existence.
    pub async fn update_expense(&self, id: &str, fields: ExpenseFields) -> ResultEngine<()> {
        let patch = fields.validate_patch()?;
        let id = parse_expense_id(id)?;

        with_tx!(self, |db_tx| {
            expenses::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(EngineError::expense_not_found)?;

            if !patch.is_empty() {
                expenses::ActiveModel::from_patch(id, patch)
                    .update(&db_tx)
                    .await?;
            }
            Ok(())
        })
    }

    /// Permanently remove an expense.
    pub async fn delete_expense(&self, id: &str) -> ResultEngine<()> {
        let id = parse_expense_id(id)?;
        let result = expenses::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::expense_not_found());
        }
        Ok(())
    }
}

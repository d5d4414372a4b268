//! Expense API endpoints.

use api_types::{
    MessageResponse,
    expense::{ExpenseCreated, ExpenseNew, ExpenseUpdate, ExpenseView},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::ExpenseFields;

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        title: expense.title,
        amount: expense.amount,
        category: expense.category,
        date: expense.date,
        payment_method: expense.payment_method,
        location: expense.location,
    }
}

fn fields_from_new(payload: ExpenseNew) -> ExpenseFields {
    ExpenseFields {
        title: payload.title,
        amount: payload.amount,
        category: payload.category,
        date: payload.date,
        payment_method: payload.payment_method,
        location: payload.location,
    }
}

fn fields_from_update(payload: ExpenseUpdate) -> ExpenseFields {
    ExpenseFields {
        title: payload.title,
        amount: payload.amount,
        category: payload.category,
        date: payload.date,
        payment_method: payload.payment_method,
        location: payload.location,
    }
}

fn message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.to_string(),
    })
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseCreated>), ServerError> {
    let Json(payload) = payload?;
    let expense = state.engine.create_expense(fields_from_new(payload)).await?;
    tracing::debug!("created expense {}", expense.id);

    Ok((
        StatusCode::CREATED,
        Json(ExpenseCreated {
            message: "Expense added successfully".to_string(),
            id: expense.id,
        }),
    ))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let expenses = state
        .engine
        .list_expenses()
        .await?
        .into_iter()
        .map(map_expense)
        .collect();
    Ok(Json(expenses))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, ServerError> {
    let Json(payload) = payload?;
    state
        .engine
        .update_expense(&id, fields_from_update(payload))
        .await?;
    tracing::debug!("updated expense {id}");

    Ok(message("Expense updated successfully"))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ServerError> {
    state.engine.delete_expense(&id).await?;
    tracing::debug!("deleted expense {id}");

    Ok(message("Expense deleted successfully"))
}

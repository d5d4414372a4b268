use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use api_types::expense::{ExpenseCreated, ExpenseNew};
use chrono::NaiveDate;
use sea_orm::Database;
use serde_json::json;
use uuid::Uuid;

use engine::Engine;
use expense_form::{
    DelaySubmitter, ExpenseForm, Field, FormState, HttpSubmitter, SubmitError, SubmitOutcome,
    Submitter,
};
use migration::MigratorTrait;
use server::ServerOptions;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[derive(Clone, Default)]
struct Recording {
    sent: Arc<Mutex<Vec<ExpenseNew>>>,
    reject_with: Option<String>,
}

impl Recording {
    fn sent(&self) -> Vec<ExpenseNew> {
        self.sent.lock().unwrap().clone()
    }
}

impl Submitter for Recording {
    async fn submit(&self, expense: ExpenseNew) -> Result<ExpenseCreated, SubmitError> {
        self.sent.lock().unwrap().push(expense);
        match &self.reject_with {
            Some(message) => Err(SubmitError::Validation(message.clone())),
            None => Ok(ExpenseCreated {
                message: "Expense added successfully".to_string(),
                id: Uuid::new_v4(),
            }),
        }
    }
}

fn fill<S: Submitter>(form: &mut ExpenseForm<S>, description: &str) {
    form.edit(Field::Amount, "12.5");
    form.edit(Field::Category, "Food & Dining");
    form.edit(Field::Description, description);
    form.edit(Field::PaymentMethod, "Cash");
    form.edit(Field::Location, "Corner bistro");
}

#[tokio::test]
async fn zero_amount_blocks_submission() {
    let submitter = Recording::default();
    let mut form = ExpenseForm::with_clock(submitter.clone(), fixed_today);
    fill(&mut form, "Lunch");
    form.edit(Field::Amount, "0");

    match form.submit().await {
        SubmitOutcome::Blocked(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[&Field::Amount], "Please enter a valid amount");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        form.state().errors.get(&Field::Amount),
        Some(&"Please enter a valid amount")
    );
    assert!(submitter.sent().is_empty());

    form.edit(Field::Amount, "3");
    assert!(form.state().errors.is_empty());
}

#[tokio::test]
async fn valid_form_is_sent_and_reset() {
    let submitter = Recording::default();
    let mut form = ExpenseForm::with_clock(submitter.clone(), fixed_today);
    fill(&mut form, "  Lunch ");

    let outcome = form.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Submitted(_)), "{outcome:?}");

    let sent = submitter.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, Some(json!("Lunch")));
    assert_eq!(sent[0].amount, Some(json!(12.5)));
    assert_eq!(sent[0].date, Some(json!("2024-01-01")));
    assert_eq!(sent[0].location, Some(json!("Corner bistro")));

    assert_eq!(form.state(), &FormState::new(fixed_today()));
}

#[tokio::test]
async fn rejected_submission_keeps_values() {
    let submitter = Recording {
        reject_with: Some("Title is required and must be at least 3 characters long".to_string()),
        ..Default::default()
    };
    let mut form = ExpenseForm::with_clock(submitter, fixed_today);
    fill(&mut form, "Hi");

    let outcome = form.submit().await;
    assert!(
        matches!(outcome, SubmitOutcome::Failed(SubmitError::Validation(_))),
        "{outcome:?}"
    );
    assert!(!form.state().submitting);
    assert_eq!(form.state().values.description, "Hi");
    assert_eq!(
        form.state().submit_error.as_deref(),
        Some("Title is required and must be at least 3 characters long")
    );
}

#[tokio::test]
async fn delay_submitter_accepts_after_waiting() {
    let mut form = ExpenseForm::with_clock(DelaySubmitter::new(Duration::from_millis(5)), fixed_today);
    fill(&mut form, "Taxi");

    let outcome = form.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Submitted(_)), "{outcome:?}");
    assert_eq!(form.state(), &FormState::new(fixed_today()));
}

#[tokio::test]
async fn http_submitter_stores_expense_through_the_api() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db.clone()).build().await.unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = server::spawn_with_listener(engine, ServerOptions::default(), listener).unwrap();

    let submitter = HttpSubmitter::new(&format!("http://{addr}/")).unwrap();
    let mut form = ExpenseForm::with_clock(submitter, fixed_today);
    fill(&mut form, "Lunch");

    let created = match form.submit().await {
        SubmitOutcome::Submitted(created) => created,
        other => panic!("unexpected outcome: {other:?}"),
    };

    let engine = Engine::builder().database(db).build().await.unwrap();
    let stored = engine.list_expenses().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, created.id);
    assert_eq!(stored[0].title, "Lunch");
    assert_eq!(stored[0].amount, 12.5);
    assert_eq!(stored[0].category.as_deref(), Some("Food & Dining"));
    assert_eq!(stored[0].payment_method.as_deref(), Some("Cash"));
    assert_eq!(stored[0].location.as_deref(), Some("Corner bistro"));
}

#[tokio::test]
async fn http_submitter_surfaces_server_validation() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = server::spawn_with_listener(engine, ServerOptions::default(), listener).unwrap();

    let submitter = HttpSubmitter::new(&format!("http://{addr}/")).unwrap();
    let mut form = ExpenseForm::with_clock(submitter, fixed_today);
    fill(&mut form, "Hi");

    match form.submit().await {
        SubmitOutcome::Failed(SubmitError::Validation(message)) => assert_eq!(
            message,
            "Title is required and must be at least 3 characters long"
        ),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

//! Tax ledger handlers
//!
//! Thin wrappers over the ledger service. Validation and not-found
//! decisions live in the service and the domain; the handlers only map
//! them onto statuses via `ApiError`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use domain::entities::{
    Expense, ExpenseCategory, ExpenseDraft, ExpenseUpdate, ProfileUpdate, TaxProfile,
};
use domain::value_objects::ExpenseId;

use crate::{error::ApiError, state::AppState};

/// `GET /api/tax/profile`
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<TaxProfile>, ApiError> {
    Ok(Json(state.ledger.profile().await?))
}

/// `PATCH /api/tax/profile`
pub async fn update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<TaxProfile>, ApiError> {
    Ok(Json(state.ledger.update_profile(update).await?))
}

/// `GET /api/tax/categories`
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseCategory>>, ApiError> {
    Ok(Json(state.ledger.categories().await?))
}

/// `PUT /api/tax/categories`
pub async fn replace_categories(
    State(state): State<AppState>,
    Json(categories): Json<Vec<ExpenseCategory>>,
) -> Result<Json<Vec<ExpenseCategory>>, ApiError> {
    Ok(Json(state.ledger.replace_categories(categories).await?))
}

/// `GET /api/tax/expenses`
pub async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ApiError> {
    Ok(Json(state.ledger.expenses().await?))
}

/// `POST /api/tax/expenses`
pub async fn add_expense(
    State(state): State<AppState>,
    Json(draft): Json<ExpenseDraft>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = state.ledger.add_expense(draft).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// `PATCH /api/tax/expenses/{id}`
pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ExpenseUpdate>,
) -> Result<Json<Expense>, ApiError> {
    let id = parse_expense_id(&id)?;
    Ok(Json(state.ledger.update_expense(&id, update).await?))
}

/// `DELETE /api/tax/expenses/{id}`
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_expense_id(&id)?;
    state.ledger.delete_expense(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/tax/reset`
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.ledger.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_expense_id(raw: &str) -> Result<ExpenseId, ApiError> {
    ExpenseId::parse(raw).map_err(ApiError::BadRequest)
}

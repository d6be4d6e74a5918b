// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Saved meal plan routes for authenticated users.
//!
//! The auth middleware is applied in routes/mod.rs for these routes, so
//! every handler can rely on the `AuthUser` extension being present.
//! Ownership itself is enforced in the store layer.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{MealPlan, NewMealPlan};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Saved plan routes (require authentication).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/mealplans",
            get(list_meal_plans)
                .post(create_meal_plan)
                .delete(delete_meal_plan),
        )
        .route("/api/mealplans/export", get(export_meal_plan))
}

// ─── List ────────────────────────────────────────────────────

#[derive(Serialize)]
struct ListResponse {
    #[serde(rename = "mealPlans")]
    meal_plans: Vec<MealPlan>,
}

/// List the caller's saved plans, newest first.
async fn list_meal_plans(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ListResponse>> {
    let meal_plans = state.db.list_meal_plans(&user.user_id).await?;

    tracing::debug!(
        user_id = %user.user_id,
        count = meal_plans.len(),
        "Listed meal plans"
    );

    Ok(Json(ListResponse { meal_plans }))
}

// ─── Create ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody {
    title: Option<String>,
    #[serde(default)]
    goal: String,
    calories: Option<serde_json::Value>,
    days: Option<serde_json::Value>,
    #[serde(default)]
    dietary_restrictions: Vec<String>,
    #[serde(default)]
    plan_content: String,
}

#[derive(Serialize)]
struct CreateResponse {
    #[serde(rename = "mealPlan")]
    meal_plan: MealPlan,
    success: bool,
}

/// Coerce a string-or-number JSON value to an integer.
fn coerce_int(value: Option<&serde_json::Value>) -> Option<i64> {
    match value {
        Some(serde_json::Value::Number(n)) => {
            n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))
        }
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Save a generated plan for the caller.
async fn create_meal_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateBody>,
) -> Result<Json<CreateResponse>> {
    let title = body
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Title is required".to_string()))?;

    let calories = coerce_int(body.calories.as_ref())
        .filter(|c| *c >= 0)
        .ok_or_else(|| AppError::BadRequest("Calories must be a number".to_string()))?;
    let days = coerce_int(body.days.as_ref())
        .filter(|d| *d >= 0)
        .ok_or_else(|| AppError::BadRequest("Days must be a number".to_string()))?;

    let meal_plan = state
        .db
        .create_meal_plan(NewMealPlan {
            user_id: user.user_id.clone(),
            title,
            goal: body.goal,
            calories: calories as u32,
            days: days as u32,
            dietary_restrictions: body.dietary_restrictions,
            plan_content: body.plan_content,
        })
        .await?;

    tracing::info!(
        user_id = %user.user_id,
        plan_id = %meal_plan.id,
        "Saved meal plan"
    );

    Ok(Json(CreateResponse {
        meal_plan,
        success: true,
    }))
}

// ─── Delete ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

#[derive(Serialize)]
struct DeleteResponse {
    success: bool,
}

/// Delete one of the caller's saved plans.
///
/// Deleting an id that matches nothing the caller owns still reports
/// success; the store layer treats it as a no-op.
async fn delete_meal_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdQuery>,
) -> Result<Json<DeleteResponse>> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Meal plan ID required".to_string()))?;

    state.db.delete_meal_plan(&id, &user.user_id).await?;

    Ok(Json(DeleteResponse { success: true }))
}

// ─── Export ──────────────────────────────────────────────────

/// Download one of the caller's saved plans as plain text.
async fn export_meal_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdQuery>,
) -> Result<Response> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Meal plan ID required".to_string()))?;

    let plan = state
        .db
        .get_meal_plan_for_user(&id, &user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Meal plan {} not found", id)))?;

    let disposition = format!("attachment; filename=\"{}\"", plan.export_filename());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        plan.export_text(),
    )
        .into_response())
}

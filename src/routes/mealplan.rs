// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal plan generation endpoint.
//!
//! Validates the request entirely before any external call, then builds the
//! prompt and invokes the generator. Generation failures surface as 500s
//! with sanitized messages via `AppError`.

use crate::error::{AppError, Result};
use crate::models::GenerationRequest;
use crate::services::build_meal_plan_prompt;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const CALORIES_MIN: i64 = 1000;
const CALORIES_MAX: i64 = 10_000;
const DAYS_MIN: i64 = 1;
const DAYS_MAX: i64 = 7;
const DEFAULT_DAYS: i64 = 1;

/// Generation routes (public).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/mealplan", post(generate_meal_plan))
}

/// A JSON value that may arrive as a number or a string.
///
/// The frontend submits form state, so numeric fields come through as
/// strings ("2000") as often as numbers (2000).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Int(i64),
    Float(f64),
    Str(String),
}

impl NumberLike {
    /// Integer value, truncating floats the way the frontend's parseInt did.
    fn as_int(&self) -> Option<i64> {
        match self {
            NumberLike::Int(n) => Some(*n),
            NumberLike::Float(f) => Some(*f as i64),
            NumberLike::Str(s) => s.trim().parse().ok(),
        }
    }
}

/// Inbound generation request, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody {
    goal: Option<String>,
    calories: Option<NumberLike>,
    days: Option<NumberLike>,
    #[serde(default)]
    dietary_restrictions: Vec<String>,
}

#[derive(Serialize)]
struct GenerateResponse {
    plan: String,
    success: bool,
}

/// Validate an inbound body into a `GenerationRequest`.
///
/// Order matters: presence, then calories range, then days range. The first
/// failure short-circuits with a message naming the violated constraint.
fn validate(body: GenerateBody) -> Result<GenerationRequest> {
    let goal = body
        .goal
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty());

    let (goal, calories) = match (goal, body.calories) {
        (Some(goal), Some(calories)) => (goal, calories),
        _ => {
            return Err(AppError::BadRequest(
                "Goal and calories are required".to_string(),
            ))
        }
    };

    let calories = calories
        .as_int()
        .filter(|c| (CALORIES_MIN..=CALORIES_MAX).contains(c))
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Calories must be a number between {} and {}",
                CALORIES_MIN, CALORIES_MAX
            ))
        })?;

    let days = match body.days {
        Some(days) => days
            .as_int()
            .filter(|d| (DAYS_MIN..=DAYS_MAX).contains(d))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Days must be a number between {} and {}",
                    DAYS_MIN, DAYS_MAX
                ))
            })?,
        None => DEFAULT_DAYS,
    };

    Ok(GenerationRequest {
        goal,
        calories: calories as u32,
        days: days as u32,
        dietary_restrictions: body.dietary_restrictions,
    })
}

/// Generate a meal plan from goal/calories/days/restrictions.
async fn generate_meal_plan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<GenerateResponse>> {
    let request = validate(body)?;

    tracing::debug!(
        goal = %request.goal,
        calories = request.calories,
        days = request.days,
        restrictions = request.dietary_restrictions.len(),
        "Generating meal plan"
    );

    let prompt = build_meal_plan_prompt(&request);
    let plan = state.plan_generator.generate(&prompt).await?;

    Ok(Json(GenerateResponse {
        plan,
        success: true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(goal: Option<&str>, calories: Option<NumberLike>, days: Option<NumberLike>) -> GenerateBody {
        GenerateBody {
            goal: goal.map(|g| g.to_string()),
            calories,
            days,
            dietary_restrictions: vec![],
        }
    }

    #[test]
    fn test_missing_goal_rejected() {
        let err = validate(body(None, Some(NumberLike::Int(2000)), None)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Goal and calories are required"));
    }

    #[test]
    fn test_blank_goal_rejected() {
        let err = validate(body(Some("   "), Some(NumberLike::Int(2000)), None)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_missing_calories_rejected() {
        let err = validate(body(Some("Weight Loss"), None, None)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Goal and calories are required"));
    }

    #[test]
    fn test_calories_out_of_range_rejected() {
        for bad in [999, 10_001, 0, -5] {
            let err = validate(body(Some("Weight Loss"), Some(NumberLike::Int(bad)), None))
                .unwrap_err();
            assert!(
                matches!(err, AppError::BadRequest(msg) if msg.contains("1000 and 10000")),
                "calories {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_non_numeric_calories_rejected() {
        let err = validate(body(
            Some("Weight Loss"),
            Some(NumberLike::Str("abc".to_string())),
            None,
        ))
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("1000 and 10000")));
    }

    #[test]
    fn test_days_out_of_range_rejected() {
        for bad in [0, 8] {
            let err = validate(body(
                Some("Weight Loss"),
                Some(NumberLike::Int(2000)),
                Some(NumberLike::Int(bad)),
            ))
            .unwrap_err();
            assert!(
                matches!(err, AppError::BadRequest(msg) if msg.contains("between 1 and 7")),
                "days {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_days_default_to_one() {
        let request = validate(body(
            Some("Muscle Gain"),
            Some(NumberLike::Str("2500".to_string())),
            None,
        ))
        .unwrap();
        assert_eq!(request.days, 1);
        assert_eq!(request.calories, 2500);
    }

    #[test]
    fn test_string_fields_coerced() {
        let request = validate(body(
            Some("Maintenance"),
            Some(NumberLike::Str(" 1800 ".to_string())),
            Some(NumberLike::Str("5".to_string())),
        ))
        .unwrap();
        assert_eq!(request.calories, 1800);
        assert_eq!(request.days, 5);
    }
}

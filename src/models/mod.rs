// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod meal_plan;

pub use meal_plan::{GenerationRequest, MealPlan, NewMealPlan};

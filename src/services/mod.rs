// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod ai;
pub mod prompt;

pub use ai::PlanGenerator;
pub use prompt::build_meal_plan_prompt;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Prompt construction for meal plan generation.

use crate::models::GenerationRequest;

/// Build the instruction prompt for a validated generation request.
///
/// Deterministic: the same request always produces the same string.
pub fn build_meal_plan_prompt(request: &GenerationRequest) -> String {
    let mut prompt = format!(
        "Create a {}-day meal plan for someone whose goal is {}, \
         aiming for about {} calories per day.",
        request.days, request.goal, request.calories
    );

    if !request.dietary_restrictions.is_empty() {
        prompt.push_str(&format!(
            " The plan must be strictly {}.",
            request.dietary_restrictions.join(", ")
        ));
    }

    prompt.push_str(
        " For each day, break the plan into breakfast, lunch, dinner, and snacks. \
         For each meal, include approximate calories and macros and brief \
         preparation notes, and end each day with a daily calorie total.",
    );

    prompt
}

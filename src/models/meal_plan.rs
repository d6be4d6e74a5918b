//! Meal plan models for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved meal plan stored in Firestore.
///
/// Serialized with snake_case field names both as the Firestore document
/// and in API responses, so the stored record is returned verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    /// Store-assigned identifier (also used as document ID)
    pub id: String,
    /// Owner (identity provider user ID)
    pub user_id: String,
    /// Title chosen at save time
    pub title: String,
    /// Fitness goal the plan was generated for
    pub goal: String,
    /// Target daily calories
    pub calories: u32,
    /// Plan length in days
    pub days: u32,
    /// Dietary restrictions applied during generation
    pub dietary_restrictions: Vec<String>,
    /// Generated plan text (opaque)
    pub plan_content: String,
    /// When the plan was saved
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    /// Render the plan as a plain-text document for export.
    pub fn export_text(&self) -> String {
        format!(
            "{}\n\nGoal: {}\nCalories: {} cal/day\nDuration: {} day(s)\n\n{}",
            self.title, self.goal, self.calories, self.days, self.plan_content
        )
    }

    /// Download filename for the exported document.
    ///
    /// Every character outside [a-z0-9] becomes an underscore.
    pub fn export_filename(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.to_lowercase().chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c);
            } else {
                slug.push('_');
            }
        }
        format!("{}.txt", slug)
    }
}

/// Fields supplied by the caller when saving a plan.
///
/// The store layer assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewMealPlan {
    pub user_id: String,
    pub title: String,
    pub goal: String,
    pub calories: u32,
    pub days: u32,
    pub dietary_restrictions: Vec<String>,
    pub plan_content: String,
}

/// A validated generation request.
///
/// Only produced by the generation endpoint's validation; lives for the
/// duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub goal: String,
    pub calories: u32,
    pub days: u32,
    pub dietary_restrictions: Vec<String>,
}

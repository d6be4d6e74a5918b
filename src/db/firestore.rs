// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed meal plan operations.
//!
//! Every operation that reads or mutates saved plans filters on the owning
//! user here, in the data-access layer, rather than trusting handler input.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{MealPlan, NewMealPlan};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // The emulator ignores token contents; any well-formed JWT works.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Meal Plan Operations ────────────────────────────────────

    /// List all saved plans owned by a user, newest first.
    pub async fn list_meal_plans(&self, user_id: &str) -> Result<Vec<MealPlan>, AppError> {
        let owner = user_id.to_string();

        self.get_client()?
            .fluent()
            .select()
            .from(collections::MEAL_PLANS)
            .filter(move |q| q.field("user_id").eq(owner.clone()))
            .order_by([(
                "created_at",
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Persist a new meal plan, assigning its identifier and timestamp.
    pub async fn create_meal_plan(&self, new_plan: NewMealPlan) -> Result<MealPlan, AppError> {
        let plan = MealPlan {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: new_plan.user_id,
            title: new_plan.title,
            goal: new_plan.goal,
            calories: new_plan.calories,
            days: new_plan.days,
            dietary_restrictions: new_plan.dietary_restrictions,
            plan_content: new_plan.plan_content,
            created_at: chrono::Utc::now(),
        };

        let _: () = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::MEAL_PLANS)
            .document_id(&plan.id)
            .object(&plan)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(plan)
    }

    /// Get a saved plan by ID, only if it belongs to the given user.
    pub async fn get_meal_plan_for_user(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<MealPlan>, AppError> {
        let plan: Option<MealPlan> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::MEAL_PLANS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(plan.filter(|p| p.user_id == user_id))
    }

    /// Delete a saved plan, only if it belongs to the given user.
    ///
    /// Deleting a plan that does not exist, or that another user owns, is a
    /// no-op: the external contract reports success either way.
    pub async fn delete_meal_plan(&self, id: &str, user_id: &str) -> Result<(), AppError> {
        match self.get_meal_plan_for_user(id, user_id).await? {
            Some(plan) => {
                self.get_client()?
                    .fluent()
                    .delete()
                    .from(collections::MEAL_PLANS)
                    .document_id(&plan.id)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;

                tracing::debug!(plan_id = %plan.id, user_id, "Deleted meal plan");
                Ok(())
            }
            None => {
                tracing::debug!(plan_id = id, user_id, "Delete matched no owned plan (no-op)");
                Ok(())
            }
        }
    }
}

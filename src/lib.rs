// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Vita API: AI-powered meal plan generation and storage.
//!
//! This crate provides the backend API for generating meal plans through
//! OpenAI and managing each user's saved plans in Firestore.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::PlanGenerator;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub plan_generator: PlanGenerator,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OpenAI client for meal plan generation.
//!
//! One non-streaming chat completion per generation request, with a fixed
//! model and system persona. The API key is checked per call rather than at
//! startup, so a server without a key still serves everything but generation.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Model used for all generations.
const MODEL: &str = "gpt-4o-mini";

/// System persona sent with every request.
const SYSTEM_PROMPT: &str = "You are Vita AI, a meal planning assistant.";

/// OpenAI chat completions client.
#[derive(Clone)]
pub struct PlanGenerator {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl PlanGenerator {
    /// Create a new generator.
    ///
    /// `api_key` may be `None`; generation calls will then fail with a
    /// configuration error instead of reaching the provider.
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Generate meal plan text from a prompt.
    ///
    /// Returns the first choice's content, or an empty string if the
    /// provider returned no content. Never retried.
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("OPENAI_API_KEY is not set".to_string()))?;

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::OpenAi(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::OpenAi(format!("HTTP {}: {}", status, body)));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| AppError::OpenAi(format!("JSON parse error: {}", e)))?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

/// Chat completions request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completions response (fields we read).
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

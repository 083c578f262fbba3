//! Shared handler state and service endpoints.

use axum::{http::StatusCode, response::IntoResponse};

use crate::activation::{ActivationClient, SubmissionRegistry};

/// State handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub activation: ActivationClient,
    pub submissions: SubmissionRegistry,
}

impl AppState {
    pub fn new(activation: ActivationClient) -> Self {
        Self {
            activation,
            submissions: SubmissionRegistry::new(),
        }
    }
}

/// GET /health_check
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

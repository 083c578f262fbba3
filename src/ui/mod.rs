//! Web UI handlers - home and account activation pages
//!
//! Pages are Dioxus components rendered to HTML on the server. The activation
//! control is a plain form post, so the page works without any client-side
//! framework:
//! - GET  /activate/:token  renders the control
//! - POST /activate/:token  confirms the token against the API
//!
//! Only `/activate/` (no segment) stands for the empty token. A segment that
//! does not decode to UTF-8 is refused with `400` and never forwarded.

pub mod components;
pub mod pages;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use dioxus::prelude::*;

use crate::activation::{ActivationOutcome, ActivationToken, SubmissionState};
use crate::api::AppState;
use pages::{ActivationNotice, ActivationPage, HomePage};

/// Renders a page component into a complete HTML document.
fn render_document(page: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"dark\">{}</html>",
        dioxus_ssr::render_element(page)
    ))
}

fn activation_view(notice: Option<ActivationNotice>) -> Html<String> {
    render_document(rsx! { ActivationPage { notice: notice } })
}

fn token_from_path(token: Result<Path<String>, PathRejection>) -> Result<ActivationToken, Response> {
    match token {
        Ok(Path(token)) => Ok(ActivationToken::new(token)),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "undecodable activation token");
            Err(rejection.into_response())
        }
    }
}

/// GET / - Home
pub async fn home_page() -> impl IntoResponse {
    render_document(rsx! { HomePage {} })
}

/// GET /activate/:token - Activation control
pub async fn activation_page(
    State(state): State<AppState>,
    token: Result<Path<String>, PathRejection>,
) -> Response {
    match token_from_path(token) {
        Ok(token) => respond(state.submissions.state(&token)),
        Err(response) => response,
    }
}

/// GET /activate/ - Activation control for the empty token
pub async fn blank_activation_page(State(state): State<AppState>) -> Response {
    respond(state.submissions.state(&ActivationToken::default()))
}

/// POST /activate/:token - Confirm the token
#[tracing::instrument(name = "Activate account", skip_all, fields(token_len))]
pub async fn activate(
    State(state): State<AppState>,
    token: Result<Path<String>, PathRejection>,
) -> Response {
    match token_from_path(token) {
        Ok(token) => press(&state, token).await,
        Err(response) => response,
    }
}

/// POST /activate/ - Confirm the empty token
#[tracing::instrument(name = "Activate account", skip_all, fields(token_len))]
pub async fn activate_blank(State(state): State<AppState>) -> Response {
    press(&state, ActivationToken::default()).await
}

/// A press while the same token is still `Submitting` sends nothing.
async fn press(state: &AppState, token: ActivationToken) -> Response {
    tracing::Span::current().record("token_len", token.as_ref().len());

    let Some(submission) = state.submissions.begin(&token) else {
        tracing::info!("activation already in flight, ignoring press");
        return respond(SubmissionState::Submitting);
    };

    let outcome = state.activation.activate(&token).await;
    respond(submission.settle(outcome))
}

/// Maps where a token's submission stands onto what the browser sees.
fn respond(submission: SubmissionState) -> Response {
    match submission {
        SubmissionState::Idle => activation_view(None).into_response(),
        SubmissionState::Submitting => (
            StatusCode::CONFLICT,
            activation_view(Some(ActivationNotice::InProgress)),
        )
            .into_response(),
        SubmissionState::Settled(ActivationOutcome::Activated) => {
            tracing::info!("account activated");
            Redirect::to("/").into_response()
        }
        SubmissionState::Settled(ActivationOutcome::Rejected { status }) => {
            tracing::warn!(%status, "activation rejected");
            activation_view(Some(ActivationNotice::Rejected)).into_response()
        }
        SubmissionState::Settled(ActivationOutcome::Unreachable(err)) => {
            tracing::error!(error = %err, "activation service unreachable");
            (
                StatusCode::BAD_GATEWAY,
                activation_view(Some(ActivationNotice::Unreachable)),
            )
                .into_response()
        }
    }
}

use axum::{
    body::Body,
    extract::Request,
    routing::get,
    serve::Serve,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api::{health_check, AppState};
use crate::ui::{activate, activate_blank, activation_page, blank_activation_page, home_page};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/activate/", get(blank_activation_page).post(activate_blank))
        .route("/activate/:token", get(activation_page).post(activate))
        .route("/health_check", get(health_check))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = Uuid::new_v4();
                // Path only: activation tokens must stay out of the logs.
                tracing::span!(
                    tracing::Level::INFO,
                    "request",
                    method = tracing::field::display(request.method()),
                    route = tracing::field::display(route_label(request.uri().path())),
                    version = tracing::field::debug(request.version()),
                    request_id = tracing::field::display(request_id)
                )
            }),
        )
        .with_state(state)
}

fn route_label(path: &str) -> &str {
    if path.starts_with("/activate/") {
        "/activate/:token"
    } else {
        path
    }
}

pub fn run(listener: TcpListener, state: AppState) -> Result<Serve<Router, Router>, std::io::Error> {
    let app = build_router(state);

    let server = axum::serve(listener, app);

    Ok(server)
}

/// Resolves on SIGINT, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!(signal = "SIGINT", "signal caught"),
        _ = terminate => tracing::info!(signal = "SIGTERM", "signal caught"),
    }
}

#[cfg(test)]
mod tests {
    use super::route_label;

    #[test]
    fn activation_paths_are_logged_without_the_token() {
        assert_eq!(route_label("/activate/secret-token"), "/activate/:token");
        assert_eq!(route_label("/activate/"), "/activate/:token");
        assert_eq!(route_label("/"), "/");
    }
}

use reqwest::StatusCode;
use url::Url;

use crate::activation::ActivationToken;
use crate::configuration::{ApiBaseUrl, ConfigurationError, Settings};

#[derive(Debug, thiserror::Error)]
pub enum ActivationError {
    #[error("activation request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("could not connect to the activation service")]
    Connect(#[source] reqwest::Error),
    #[error("activation request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ActivationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ActivationError::Timeout(err)
        } else if err.is_connect() {
            ActivationError::Connect(err)
        } else {
            ActivationError::Transport(err)
        }
    }
}

/// Result of one confirmation attempt.
#[derive(Debug)]
pub enum ActivationOutcome {
    /// The API answered `204 No Content`.
    Activated,
    /// The API answered with any other status. The body is not inspected.
    Rejected { status: StatusCode },
    /// The request never produced a response.
    Unreachable(ActivationError),
}

impl ActivationOutcome {
    pub fn from_status(status: StatusCode) -> ActivationOutcome {
        if status == StatusCode::NO_CONTENT {
            ActivationOutcome::Activated
        } else {
            ActivationOutcome::Rejected { status }
        }
    }
}

/// Confirms activation tokens against the remote users API.
#[derive(Debug, Clone)]
pub struct ActivationClient {
    http_client: reqwest::Client,
    base_url: ApiBaseUrl,
}

impl ActivationClient {
    pub fn new(http_client: reqwest::Client, base_url: ApiBaseUrl) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigurationError> {
        let base_url = settings.base_url()?;
        let http_client = reqwest::Client::builder()
            .timeout(settings.api.timeout())
            .build()?;
        Ok(Self::new(http_client, base_url))
    }

    pub fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// `{base}/users/activate/{token}`, with the token as a single encoded segment.
    pub fn activation_url(&self, token: &ActivationToken) -> Url {
        self.base_url
            .join_segments(["users", "activate", token.as_ref()])
    }

    /// Sends exactly one `PUT` with no body and classifies the answer.
    pub async fn activate(&self, token: &ActivationToken) -> ActivationOutcome {
        let url = self.activation_url(token);
        match self.http_client.put(url).send().await {
            Ok(response) => ActivationOutcome::from_status(response.status()),
            Err(err) => ActivationOutcome::Unreachable(err.into()),
        }
    }
}

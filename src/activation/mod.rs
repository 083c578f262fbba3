//! Account activation flow
//!
//! A pending account is confirmed by presenting the token it was issued
//! out-of-band (usually by email) to the remote API:
//! - `PUT {API_URL}/users/activate/{token}`, no body
//! - `204 No Content` means the account is active; anything else is a rejection
//!
//! This module provides:
//! - The opaque token type taken from the page route
//! - The HTTP client that performs the confirmation call
//! - Per-token submission tracking so repeated presses don't pile up requests

pub mod client;
pub mod submission;
pub mod token;

pub use client::{ActivationClient, ActivationError, ActivationOutcome};
pub use submission::{SubmissionGuard, SubmissionRegistry, SubmissionState};
pub use token::ActivationToken;

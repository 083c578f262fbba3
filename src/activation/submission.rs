use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::activation::{ActivationOutcome, ActivationToken};

/// Where a token's activation control stands.
#[derive(Debug)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Settled(ActivationOutcome),
}

/// Tracks tokens whose confirmation request is in flight.
///
/// Only `Submitting` is stored. A token that is absent is `Idle`, and
/// settling removes the entry so a failed activation can be tried again.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRegistry {
    in_flight: Arc<Mutex<HashSet<ActivationToken>>>,
}

impl SubmissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<ActivationToken>> {
        // A poisoned set still holds valid entries.
        self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self, token: &ActivationToken) -> SubmissionState {
        if self.lock().contains(token) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    /// Moves `token` from `Idle` to `Submitting`.
    ///
    /// Returns `None` when a submission for the same token is already in
    /// flight; the caller must then do nothing.
    pub fn begin(&self, token: &ActivationToken) -> Option<SubmissionGuard> {
        let mut in_flight = self.lock();
        if !in_flight.insert(token.clone()) {
            return None;
        }
        Some(SubmissionGuard {
            registry: self.clone(),
            token: Some(token.clone()),
        })
    }

    #[cfg(test)]
    fn in_flight(&self) -> usize {
        self.lock().len()
    }

    fn release(&self, token: &ActivationToken) {
        self.lock().remove(token);
    }
}

/// Holds a token in `Submitting` until settled or dropped.
///
/// Dropping without settling (for example when the triggering request is
/// cancelled) returns the token to `Idle`.
#[derive(Debug)]
pub struct SubmissionGuard {
    registry: SubmissionRegistry,
    token: Option<ActivationToken>,
}

impl SubmissionGuard {
    pub fn settle(mut self, outcome: ActivationOutcome) -> SubmissionState {
        if let Some(token) = self.token.take() {
            self.registry.release(&token);
        }
        SubmissionState::Settled(outcome)
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.registry.release(&token);
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn second_begin_while_submitting_is_refused() {
        let registry = SubmissionRegistry::new();
        let token = ActivationToken::new("abc123");

        let guard = registry.begin(&token);
        assert!(guard.is_some());
        assert!(matches!(registry.state(&token), SubmissionState::Submitting));
        assert!(registry.begin(&token).is_none());
    }

    #[test]
    fn different_tokens_do_not_block_each_other() {
        let registry = SubmissionRegistry::new();
        let _first = registry.begin(&ActivationToken::new("one")).unwrap();
        let _second = registry.begin(&ActivationToken::new("two")).unwrap();
        assert_eq!(registry.in_flight(), 2);
    }

    #[test]
    fn settling_returns_token_to_idle() {
        let registry = SubmissionRegistry::new();
        let token = ActivationToken::new("abc123");

        let guard = registry.begin(&token).unwrap();
        let state = guard.settle(ActivationOutcome::Rejected {
            status: StatusCode::NOT_FOUND,
        });

        assert!(matches!(
            state,
            SubmissionState::Settled(ActivationOutcome::Rejected { .. })
        ));
        assert!(matches!(registry.state(&token), SubmissionState::Idle));
        assert!(registry.begin(&token).is_some());
    }

    #[test]
    fn dropped_guard_releases_the_token() {
        let registry = SubmissionRegistry::new();
        let token = ActivationToken::default();

        drop(registry.begin(&token).unwrap());

        assert_eq!(registry.in_flight(), 0);
    }
}

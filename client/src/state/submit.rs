//! Submission busy state and the submit cycle.
//!
//! DESIGN
//! ======
//! A submission claims an in-flight token before the request is sent. While
//! a token is held the button is disabled, the label reads "Generating..."
//! and the spinner is visible. The token is held by a `BusyGuard` and
//! released on drop, so every exit path (success, failure, panic unwinding
//! out of the send future) clears the busy state exactly once.
//!
//! A submit that arrives while a token is outstanding is ignored.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::RefCell;
use std::future::Future;

use leptos::prelude::*;
use schema::{GenerationRequest, GenerationResult};

use crate::net::api::GenerateError;
use crate::state::preview::PreviewModel;

/// Submit button label while idle.
pub const IDLE_LABEL: &str = "Generate Post";

/// Submit button label while a request is in flight.
pub const BUSY_LABEL: &str = "Generating...";

/// Message shown in the blocking alert when generation fails.
pub const FAILURE_ALERT: &str = "Error generating post. Please check the console and ensure the server is running.";

/// In-flight tracking for the generator form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    in_flight: Option<u64>,
    next_token: u64,
}

impl SubmitState {
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() { BUSY_LABEL } else { IDLE_LABEL }
    }

    /// Claim the in-flight slot. Returns `None` if a request is already pending.
    pub fn try_begin(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            return None;
        }
        self.next_token += 1;
        self.in_flight = Some(self.next_token);
        Some(self.next_token)
    }

    /// Release the slot held by `token`. Stale tokens are ignored.
    pub fn finish(&mut self, token: u64) -> bool {
        if self.in_flight == Some(token) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}

/// Storage that owns a [`SubmitState`]: a signal in the page, a `RefCell` in tests.
pub trait BusySlot {
    fn begin(&self) -> Option<u64>;
    fn finish(&self, token: u64);
}

impl BusySlot for RwSignal<SubmitState> {
    fn begin(&self) -> Option<u64> {
        self.try_update(SubmitState::try_begin).flatten()
    }

    fn finish(&self, token: u64) {
        // The page may already be gone when a late response lands.
        let _ = self.try_update(|state| state.finish(token));
    }
}

impl BusySlot for RefCell<SubmitState> {
    fn begin(&self) -> Option<u64> {
        self.borrow_mut().try_begin()
    }

    fn finish(&self, token: u64) {
        self.borrow_mut().finish(token);
    }
}

struct BusyGuard<'a, S: BusySlot> {
    slot: &'a S,
    token: u64,
}

impl<S: BusySlot> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.slot.finish(self.token);
    }
}

/// Result of one submit cycle.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Response received; preview content ready to display.
    Rendered(PreviewModel),
    /// Request, status or parse failure.
    Failed(GenerateError),
    /// Another submission was still in flight.
    Ignored,
}

/// Run one submit cycle: claim the busy slot, send `request`, map the answer.
///
/// The busy slot is released before this returns, whatever the outcome.
pub async fn run_submission<S, F, Fut>(slot: &S, request: GenerationRequest, send: F) -> SubmitOutcome
where
    S: BusySlot,
    F: FnOnce(GenerationRequest) -> Fut,
    Fut: Future<Output = Result<GenerationResult, GenerateError>>,
{
    let Some(token) = slot.begin() else {
        return SubmitOutcome::Ignored;
    };
    let _guard = BusyGuard { slot, token };

    let brand_name = request.profile.name.clone();
    match send(request).await {
        Ok(result) => SubmitOutcome::Rendered(PreviewModel::render(&result, &brand_name)),
        Err(err) => SubmitOutcome::Failed(err),
    }
}

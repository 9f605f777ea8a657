//! Browser-only side effects: console logging and blocking alerts.
//!
//! SSR builds compile these to no-ops so server rendering stays side-effect
//! free.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::state::submit::FAILURE_ALERT;

/// Show a blocking `window.alert` with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Log a failed generation to the console and alert the user.
pub fn report_generation_failure(err: &impl std::fmt::Display) {
    #[cfg(feature = "hydrate")]
    log::error!("{err}");
    #[cfg(not(feature = "hydrate"))]
    let _ = err;
    alert(FAILURE_ALERT);
}

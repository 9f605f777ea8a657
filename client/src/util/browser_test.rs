#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::net::api::GenerateError;

#[test]
fn alert_is_noop_but_callable() {
    alert("hello");
}

#[test]
fn report_failure_is_noop_but_callable() {
    report_generation_failure(&GenerateError::Status(502));
}

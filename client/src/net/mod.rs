//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the single REST call the generator page makes.

pub mod api;

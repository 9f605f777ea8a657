//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `generate` drives one request end to end: `prompt` builds the LLM input,
//! `parse` reads the reply back into fields, `validation` checks them.

pub mod generate;
pub mod parse;
pub mod prompt;
pub mod validation;

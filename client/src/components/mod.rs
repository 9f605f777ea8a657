//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the generator form and preview card while reading and
//! writing shared view-models from Leptos context providers.

pub mod festival_section;
pub mod form_input;
pub mod generate_button;
pub mod preview_panel;

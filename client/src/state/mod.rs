//! Client-side view-models.
//!
//! DESIGN
//! ======
//! State is split by concern (`form`, `preview`, `submit`) so components
//! depend on small focused models provided through Leptos context.

pub mod form;
pub mod preview;
pub mod submit;

//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain structs wrapped in `RwSignal` by the pages that own
//! them, so transitions stay unit-testable without a browser.

pub mod auth_form;
pub mod feedback;

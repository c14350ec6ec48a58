//! Utility helpers shared across portal pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (navigation, alerts, storage,
//! timers) from page markup so the same glue is not repeated per page.

pub mod local_store;
pub mod navigation;
pub mod submission;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces shared by several portal pages: the form status
//! banner, navigation buttons, and images with a placeholder fallback.

pub mod fallback_image;
pub mod feedback_banner;
pub mod nav_button;

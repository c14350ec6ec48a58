//! Page modules, one per host-served portal page.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates shared rendering to
//! `components` and browser glue to `util`.

pub mod admin;
pub mod dashboard;
pub mod home;
pub mod signin;
pub mod signup;
pub mod teacher;

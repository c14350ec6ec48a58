//! Compile-time portal configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal pages are served by an external host, so there is no runtime
//! configuration source. Endpoints, page paths, timings, and the fixed
//! user-facing copy live here so pages and state modules never hard-code them.

use std::time::Duration;

// =============================================================
// API endpoints
// =============================================================

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const SIGNUP_ENDPOINT: &str = "/api/signup";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

// =============================================================
// Page paths
// =============================================================

pub const SIGNIN_PAGE: &str = "/signin.html";
pub const SIGNUP_PAGE: &str = "/signup.html";
/// Landing page used when a successful sign-in omits its redirect target.
pub const DEFAULT_LANDING_PAGE: &str = "/dashboard.html";

// =============================================================
// Timings
// =============================================================

pub const SIGNIN_REDIRECT_DELAY: Duration = Duration::from_millis(1000);
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// Error banners remove themselves after this long.
pub const ERROR_BANNER_TTL: Duration = Duration::from_millis(5000);

// =============================================================
// Images
// =============================================================

pub const DEFAULT_LOGO_URL: &str = "https://via.placeholder.com/200x60/1e3c72/ffffff?text=UNIVERSITY+LOGO";
pub const DEFAULT_PROFILE_URL: &str = "https://via.placeholder.com/50x50/1e3c72/ffffff?text=U";

// =============================================================
// Fixed messages
// =============================================================

pub const GENERIC_REJECTION_MESSAGE: &str = "Une erreur est survenue.";
pub const ANNOUNCEMENT_PLACEHOLDER_MESSAGE: &str =
    "Annonce publiée (placeholder). Ajoutez la logique plus tard.";
pub const COURSE_PLACEHOLDER_MESSAGE: &str =
    "Cours enregistré (placeholder). Ajoutez la logique plus tard.";

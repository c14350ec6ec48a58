//! # campus-portal
//!
//! Leptos + WASM frontend for the university portal pages: landing page,
//! sign-in and sign-up forms, and the student, teacher, and admin home pages.
//!
//! The sign-in and sign-up forms share one submission flow
//! (`state::auth_form` + `util::submission`) and one status banner
//! (`state::feedback` + `components::feedback_banner`). Every other page is
//! navigation wiring over the table in `util::navigation`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

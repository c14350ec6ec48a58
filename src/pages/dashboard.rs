//! Student dashboard: shortcuts to every student page plus the assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only serves this route to signed-in students, so the page does
//! no auth check of its own. Logo and profile photo fall back to placeholder
//! images when the host has none.

use leptos::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::nav_button::{NavButton, NavGrid};
use crate::config::{DEFAULT_LOGO_URL, DEFAULT_PROFILE_URL};
use crate::util::navigation::{DASHBOARD_CONTROLS, NavControl};

const LOGO_URL: &str = "/static/images/logo.png";
const PROFILE_PHOTO_URL: &str = "/static/images/profile.png";

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <FallbackImage
                    id="universityLogo"
                    class="university-logo"
                    src=LOGO_URL
                    fallback=DEFAULT_LOGO_URL
                    alt="Logo de l'université"
                />
                <div class="dashboard-header__profile">
                    <FallbackImage
                        id="profilePhoto"
                        class="profile-photo"
                        src=PROFILE_PHOTO_URL
                        fallback=DEFAULT_PROFILE_URL
                        alt="Photo de profil"
                    />
                    <NavButton control=NavControl::Logout class=Some("btn-logout")/>
                </div>
            </header>
            <main>
                <h1>"Tableau de bord"</h1>
                <NavGrid controls=DASHBOARD_CONTROLS class="dashboard-card"/>
            </main>
            <NavButton control=NavControl::AssistantBubble class=Some("ai-assistant-bubble")/>
        </div>
    }
}

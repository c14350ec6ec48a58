//! Administration home page.

use leptos::prelude::*;

use crate::components::nav_button::{NavButton, NavGrid};
use crate::config::ANNOUNCEMENT_PLACEHOLDER_MESSAGE;
use crate::util::navigation::{ADMIN_CONTROLS, NavControl, notify};

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <header class="dashboard-header">
                <h1>"Administration"</h1>
                <NavButton control=NavControl::Logout class=Some("btn-logout")/>
            </header>
            <NavGrid controls=ADMIN_CONTROLS class="dashboard-card"/>
            <section class="admin-announcement">
                <h2>"Nouvelle annonce"</h2>
                <textarea id="announcementText" rows="4"></textarea>
                // Publishing has no backend yet.
                <button
                    type="button"
                    id="publishAnnouncementBtn"
                    on:click=move |_| notify(ANNOUNCEMENT_PLACEHOLDER_MESSAGE)
                >
                    "Publier"
                </button>
            </section>
        </div>
    }
}

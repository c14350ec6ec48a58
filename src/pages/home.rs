//! Public landing page.

use leptos::prelude::*;

use crate::components::nav_button::{NavButton, NavGrid};
use crate::util::navigation::{HOME_CONTROLS, NavControl};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-hero">
                <h1>"Portail Universitaire"</h1>
                <p>"Cours, quiz, planning et assistant IA au même endroit."</p>
                <NavGrid controls=HOME_CONTROLS class="btn-primary"/>
            </header>
            <NavButton control=NavControl::HomeAssistant class=Some("ai-assistant-bubble")/>
        </div>
    }
}

//! Teacher home page.

use leptos::prelude::*;

use crate::components::nav_button::{NavButton, NavGrid};
use crate::config::COURSE_PLACEHOLDER_MESSAGE;
use crate::util::navigation::{NavControl, TEACHER_CONTROLS, notify};

/// Name of the first file picked in a file input, if any.
#[cfg(feature = "hydrate")]
fn first_selected_file(ev: &leptos::ev::Event) -> Option<String> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    Some(file.name())
}

#[component]
pub fn TeacherPage() -> impl IntoView {
    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(name) = first_selected_file(&ev) {
                notify(&crate::util::navigation::file_selected_message(&name));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div class="teacher-page">
            <header class="dashboard-header">
                <h1>"Espace enseignant"</h1>
                <NavButton control=NavControl::Logout class=Some("btn-logout")/>
            </header>
            <NavGrid controls=TEACHER_CONTROLS class="dashboard-card"/>
            <section class="teacher-course">
                <h2>"Nouveau cours"</h2>
                <input id="courseFile" type="file" on:change=on_file_change/>
                // Saving has no backend yet.
                <button
                    type="button"
                    id="saveCourseBtn"
                    on:click=move |_| notify(COURSE_PLACEHOLDER_MESSAGE)
                >
                    "Enregistrer"
                </button>
            </section>
        </div>
    }
}

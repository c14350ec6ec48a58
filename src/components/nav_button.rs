//! Button bound to one entry of the navigation table.

use leptos::prelude::*;

use crate::util::navigation::{NavControl, navigate_to};

#[component]
pub fn NavButton(
    control: NavControl,
    #[prop(optional_no_strip)] class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=control.element_id()
            class=class
            on:click=move |_| navigate_to(control.target())
        >
            {control.label()}
        </button>
    }
}

/// One [`NavButton`] per control, in table order.
#[component]
pub fn NavGrid(
    controls: &'static [NavControl],
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="nav-grid">
            {controls
                .iter()
                .map(|&control| view! { <NavButton control=control class=class/> })
                .collect_view()}
        </div>
    }
}

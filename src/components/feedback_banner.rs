//! Status banner rendered as the first child of an auth form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the form's single banner slot (`state::feedback`). The message is a
//! text node, so server-supplied error text can never inject markup.

#[cfg(all(test, feature = "ssr"))]
#[path = "feedback_banner_test.rs"]
mod feedback_banner_test;

use leptos::prelude::*;

use crate::state::feedback::Banner;

#[component]
pub fn FeedbackBanner(#[prop(into)] banner: Signal<Option<Banner>>) -> impl IntoView {
    move || {
        banner.get().map(|b| {
            view! {
                <div class=b.kind.class_name() style=b.kind.inline_style() role="alert">
                    {b.message}
                </div>
            }
        })
    }
}

//! `<img>` that swaps to a placeholder once if its source fails to load.

#[cfg(test)]
#[path = "fallback_image_test.rs"]
mod fallback_image_test;

use leptos::prelude::*;

/// Current source of an image with a one-shot fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFallback {
    primary: String,
    fallback: &'static str,
    failed: bool,
}

impl ImageFallback {
    pub fn new(primary: impl Into<String>, fallback: &'static str) -> Self {
        Self {
            primary: primary.into(),
            fallback,
            failed: false,
        }
    }

    pub fn src(&self) -> &str {
        if self.failed { self.fallback } else { &self.primary }
    }

    /// Whether a load error should switch to the fallback. Only the first
    /// error does, so a broken placeholder cannot loop.
    pub fn can_fall_back(&self) -> bool {
        !self.failed
    }

    pub fn mark_failed(&mut self) {
        self.failed = true;
    }
}

#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    fallback: &'static str,
    #[prop(into)] alt: String,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let image = RwSignal::new(ImageFallback::new(src, fallback));

    let on_error = move |_| {
        // Leave the signal untouched on repeat errors; re-setting `src`
        // would start another load.
        if image.with_untracked(ImageFallback::can_fall_back) {
            image.update(ImageFallback::mark_failed);
        }
    };

    view! {
        <img
            id=id
            class=class
            alt=alt
            src=move || image.with(|i| i.src().to_owned())
            on:error=on_error
        />
    }
}

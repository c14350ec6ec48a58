//! Sign-in page: email + password form posting to `/api/login`.

use leptos::prelude::*;

use crate::components::feedback_banner::FeedbackBanner;
use crate::config::SIGNUP_PAGE;
use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::auth_form::{AuthFormKind, AuthFormState};
use crate::util::submission::submit_form;

#[component]
pub fn SignInPage() -> impl IntoView {
    let form = RwSignal::new(AuthFormState::new(AuthFormKind::SignIn));
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest::from_fields(&email.get_untracked(), &password.get_untracked());
        submit_form(form, async move { api::login(&request).await });
    };

    let banner = Signal::derive(move || form.with(|state| state.feedback.current().cloned()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Connexion"</h1>
                <form id="signinForm" class="auth-form" on:submit=on_submit>
                    <FeedbackBanner banner=banner/>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Mot de passe"</label>
                    <input
                        id="password"
                        type="password"
                        required
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="btn-signin"
                        type="submit"
                        disabled=move || form.with(|state| state.button.disabled)
                    >
                        {move || form.with(|state| state.button.label.clone())}
                    </button>
                </form>
                <p class="auth-switch">
                    "Pas encore de compte ? "
                    <a href=SIGNUP_PAGE>"Créer un compte"</a>
                </p>
            </div>
        </div>
    }
}

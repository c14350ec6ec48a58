//! Sign-up page: registration form posting to `/api/signup`.
//!
//! On success the page always moves on to the sign-in page; any redirect the
//! host sends back is ignored.

use leptos::prelude::*;

use crate::components::feedback_banner::FeedbackBanner;
use crate::config::SIGNIN_PAGE;
use crate::net::api;
use crate::net::types::{SignupRequest, UserType};
use crate::state::auth_form::{AuthFormKind, AuthFormState};
use crate::util::submission::submit_form;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let form = RwSignal::new(AuthFormState::new(AuthFormKind::SignUp));
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let user_type = RwSignal::new(UserType::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = SignupRequest {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            user_type: user_type.get_untracked(),
        };
        submit_form(form, async move { api::signup(&request).await });
    };

    let banner = Signal::derive(move || form.with(|state| state.feedback.current().cloned()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Créer un compte"</h1>
                <form id="signupForm" class="auth-form" on:submit=on_submit>
                    <FeedbackBanner banner=banner/>
                    <label for="fullName">"Nom complet"</label>
                    <input
                        id="fullName"
                        type="text"
                        required
                        autocomplete="name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Mot de passe"</label>
                    <input
                        id="password"
                        type="password"
                        required
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label for="userType">"Type de compte"</label>
                    <select
                        id="userType"
                        on:change=move |ev| user_type.set(UserType::from_value(&event_target_value(&ev)))
                    >
                        {UserType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind.as_str()
                                        selected=move || user_type.get() == kind
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button
                        class="btn-signin"
                        type="submit"
                        disabled=move || form.with(|state| state.button.disabled)
                    >
                        {move || form.with(|state| state.button.label.clone())}
                    </button>
                </form>
                <p class="auth-switch">
                    "Déjà inscrit ? "
                    <a href=SIGNIN_PAGE>"Se connecter"</a>
                </p>
            </div>
        </div>
    }
}

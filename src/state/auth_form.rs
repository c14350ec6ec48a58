//! Submission state for the sign-in and sign-up forms.
//!
//! DESIGN
//! ======
//! One [`AuthFormState`] is created per mounted form and owns both the submit
//! button affordance and the form's feedback banner. A submission is two
//! transitions:
//!
//! 1. [`AuthFormState::begin`] runs synchronously in the submit handler. It
//!    swaps in the busy label and disables the button before any request is
//!    started, and refuses to start while a request is already in flight.
//! 2. [`AuthFormState::resolve`] applies the request result and tells the
//!    caller what to schedule next: a delayed redirect or a banner expiry.
//!
//! Both forms share this type; only [`AuthFormKind`] differs.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::time::Duration;

use crate::config::{
    DEFAULT_LANDING_PAGE, GENERIC_REJECTION_MESSAGE, LOGIN_ENDPOINT, SIGNIN_PAGE, SIGNIN_REDIRECT_DELAY,
    SIGNUP_ENDPOINT, SIGNUP_REDIRECT_DELAY,
};
use crate::net::api::ApiError;
use crate::net::types::SubmissionOutcome;
use crate::state::feedback::{BannerKind, BannerTicket, FeedbackState};

/// Which credentials form this state drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFormKind {
    SignIn,
    SignUp,
}

impl AuthFormKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::SignIn => LOGIN_ENDPOINT,
            Self::SignUp => SIGNUP_ENDPOINT,
        }
    }

    pub fn idle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Se connecter",
            Self::SignUp => "Créer un compte",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Self::SignIn => "Connexion...",
            Self::SignUp => "Création...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::SignIn => "Connexion réussie !",
            Self::SignUp => "Compte créé ! Redirection...",
        }
    }

    /// Shown for transport failures; never the raw transport error.
    pub fn connection_error_message(self) -> &'static str {
        match self {
            Self::SignIn => "Erreur de connexion au serveur.",
            Self::SignUp => "Erreur serveur.",
        }
    }

    pub fn redirect_delay(self) -> Duration {
        match self {
            Self::SignIn => SIGNIN_REDIRECT_DELAY,
            Self::SignUp => SIGNUP_REDIRECT_DELAY,
        }
    }

    /// Where a successful submission navigates.
    ///
    /// Sign-up always lands on the sign-in page, ignoring any server redirect.
    pub fn redirect_target(self, outcome: &SubmissionOutcome) -> String {
        match self {
            Self::SignIn => outcome
                .redirect
                .clone()
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DEFAULT_LANDING_PAGE.to_owned()),
            Self::SignUp => SIGNIN_PAGE.to_owned(),
        }
    }
}

/// Submit button text and interactivity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
}

/// Follow-up work after a submission resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Navigate to `target` once `delay` has elapsed. The button stays busy.
    Redirect { target: String, delay: Duration },
    /// The form is usable again; dismiss the error banner `ticket` after
    /// `dismiss_after`, as set by its [`BannerKind`].
    Retry {
        ticket: BannerTicket,
        dismiss_after: Option<Duration>,
    },
}

#[derive(Clone, Debug)]
pub struct AuthFormState {
    pub kind: AuthFormKind,
    pub button: ButtonState,
    pub feedback: FeedbackState,
    /// Label captured by `begin`, restored on failure.
    saved_label: Option<String>,
}

impl AuthFormState {
    pub fn new(kind: AuthFormKind) -> Self {
        Self {
            kind,
            button: ButtonState {
                label: kind.idle_label().to_owned(),
                disabled: false,
            },
            feedback: FeedbackState::default(),
            saved_label: None,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.button.disabled
    }

    /// Mark the button busy. Returns `false`, changing nothing, if it already is.
    pub fn begin(&mut self) -> bool {
        if self.button.disabled {
            return false;
        }
        let busy = self.kind.busy_label().to_owned();
        self.saved_label = Some(std::mem::replace(&mut self.button.label, busy));
        self.button.disabled = true;
        true
    }

    /// Apply the result of the request started after `begin`.
    pub fn resolve(&mut self, result: Result<SubmissionOutcome, ApiError>) -> Resolution {
        match result {
            Ok(outcome) if outcome.success => {
                self.feedback
                    .show(BannerKind::Success, self.kind.success_message());
                Resolution::Redirect {
                    target: self.kind.redirect_target(&outcome),
                    delay: self.kind.redirect_delay(),
                }
            }
            Ok(outcome) => {
                let message = outcome
                    .error
                    .unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_owned());
                self.fail(message)
            }
            Err(_) => self.fail(self.kind.connection_error_message().to_owned()),
        }
    }

    fn fail(&mut self, message: String) -> Resolution {
        self.restore_button();
        let ticket = self.feedback.show(BannerKind::Error, message);
        Resolution::Retry {
            ticket,
            dismiss_after: BannerKind::Error.auto_dismiss_after(),
        }
    }

    fn restore_button(&mut self) {
        if let Some(label) = self.saved_label.take() {
            self.button.label = label;
        }
        self.button.disabled = false;
    }
}

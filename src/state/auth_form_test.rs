use super::*;

fn success(redirect: Option<&str>) -> Result<SubmissionOutcome, ApiError> {
    Ok(SubmissionOutcome {
        success: true,
        redirect: redirect.map(str::to_owned),
        error: None,
    })
}

fn rejected(error: Option<&str>) -> Result<SubmissionOutcome, ApiError> {
    Ok(SubmissionOutcome {
        success: false,
        redirect: None,
        error: error.map(str::to_owned),
    })
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_form_is_idle_without_banner() {
    let state = AuthFormState::new(AuthFormKind::SignIn);
    assert_eq!(state.button.label, "Se connecter");
    assert!(!state.button.disabled);
    assert!(!state.in_flight());
    assert!(state.feedback.current().is_none());
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_sets_busy_label_and_disables() {
    let mut state = AuthFormState::new(AuthFormKind::SignUp);
    assert!(state.begin());
    assert_eq!(state.button.label, "Création...");
    assert!(state.button.disabled);
}

#[test]
fn begin_while_in_flight_is_rejected() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    assert!(state.begin());
    assert!(!state.begin());
    assert_eq!(state.button.label, "Connexion...");
}

#[test]
fn begin_keeps_existing_banner_until_resolve() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    state.begin();
    state.resolve(rejected(Some("E")));
    state.begin();
    assert_eq!(state.feedback.current().unwrap().message, "E");
}

// =============================================================
// resolve: success
// =============================================================

#[test]
fn signin_success_redirects_to_server_target_after_one_second() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    state.begin();
    let resolution = state.resolve(success(Some("/x")));
    assert_eq!(
        resolution,
        Resolution::Redirect {
            target: "/x".to_owned(),
            delay: Duration::from_millis(1000),
        }
    );
    let banner = state.feedback.current().unwrap();
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(banner.message, "Connexion réussie !");
}

#[test]
fn success_leaves_button_busy() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    state.begin();
    state.resolve(success(Some("dashboard.html")));
    assert!(state.button.disabled);
    assert_eq!(state.button.label, "Connexion...");
    assert!(!state.begin());
}

#[test]
fn signin_success_without_redirect_uses_default_landing() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    state.begin();
    let Resolution::Redirect { target, .. } = state.resolve(success(None)) else {
        panic!("expected redirect");
    };
    assert_eq!(target, "/dashboard.html");
}

#[test]
fn signup_success_ignores_server_redirect() {
    let mut state = AuthFormState::new(AuthFormKind::SignUp);
    state.begin();
    let resolution = state.resolve(success(Some("/elsewhere")));
    assert_eq!(
        resolution,
        Resolution::Redirect {
            target: "/signin.html".to_owned(),
            delay: Duration::from_millis(1500),
        }
    );
    assert_eq!(
        state.feedback.current().unwrap().message,
        "Compte créé ! Redirection..."
    );
}

// =============================================================
// resolve: failures
// =============================================================

#[test]
fn rejection_shows_server_error_verbatim_and_restores_button() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    state.begin();
    let resolution = state.resolve(rejected(Some("E")));
    assert!(matches!(
        resolution,
        Resolution::Retry { dismiss_after, .. } if dismiss_after == Some(Duration::from_millis(5000))
    ));
    let banner = state.feedback.current().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.message, "E");
    assert_eq!(state.button.label, "Se connecter");
    assert!(!state.button.disabled);
}

#[test]
fn rejection_without_message_uses_generic_text() {
    let mut state = AuthFormState::new(AuthFormKind::SignUp);
    state.begin();
    state.resolve(rejected(None));
    assert_eq!(
        state.feedback.current().unwrap().message,
        "Une erreur est survenue."
    );
}

#[test]
fn transport_failure_shows_fixed_message_not_raw_error() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    state.begin();
    state.resolve(Err(ApiError::Transport("TypeError: Failed to fetch".to_owned())));
    let banner = state.feedback.current().unwrap();
    assert_eq!(banner.message, "Erreur de connexion au serveur.");
    assert!(!banner.message.contains("Failed to fetch"));
    assert!(!state.button.disabled);
}

#[test]
fn signup_decode_failure_uses_signup_message() {
    let mut state = AuthFormState::new(AuthFormKind::SignUp);
    state.begin();
    state.resolve(Err(ApiError::Decode("expected value".to_owned())));
    assert_eq!(state.feedback.current().unwrap().message, "Erreur serveur.");
    assert_eq!(state.button.label, "Créer un compte");
}

#[test]
fn retry_ticket_dismisses_the_error_banner() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    state.begin();
    let Resolution::Retry { ticket, .. } = state.resolve(rejected(Some("E"))) else {
        panic!("expected retry");
    };
    assert!(state.feedback.dismiss(ticket));
    assert!(!state.feedback.dismiss(ticket));
}

#[test]
fn old_expiry_does_not_remove_next_attempts_banner() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    state.begin();
    let Resolution::Retry { ticket: first, .. } = state.resolve(rejected(Some("first"))) else {
        panic!("expected retry");
    };
    state.begin();
    state.resolve(rejected(Some("second")));
    assert!(!state.feedback.dismiss(first));
    assert_eq!(state.feedback.current().unwrap().message, "second");
}

#[test]
fn form_is_retryable_after_failure() {
    let mut state = AuthFormState::new(AuthFormKind::SignIn);
    state.begin();
    state.resolve(Err(ApiError::Unavailable));
    assert!(state.begin());
}

// =============================================================
// AuthFormKind
// =============================================================

#[test]
fn endpoints_match_host_contract() {
    assert_eq!(AuthFormKind::SignIn.endpoint(), "/api/login");
    assert_eq!(AuthFormKind::SignUp.endpoint(), "/api/signup");
}

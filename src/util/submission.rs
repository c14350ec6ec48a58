//! Submit driver shared by the sign-in and sign-up pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages build the request future and hand it here together with their form
//! signal. The future is only polled if [`AuthFormState::begin`] accepted the
//! submission, so a click on a busy form never reaches the network. Once the
//! request settles the driver applies the result and then either navigates
//! after the form's redirect delay or expires the error banner.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::SubmissionOutcome;
use crate::state::auth_form::AuthFormState;
#[cfg(feature = "hydrate")]
use crate::state::auth_form::Resolution;

/// Return `request` only if the form accepted a new submission.
///
/// Dropping an unpolled future issues nothing, so a rejected submission
/// costs no request.
pub fn gate<Fut>(state: &mut AuthFormState, request: Fut) -> Option<Fut> {
    state.begin().then_some(request)
}

/// Start a submission for `form`. Returns `false` if one is already in flight.
pub fn submit_form<Fut>(form: RwSignal<AuthFormState>, request: Fut) -> bool
where
    Fut: Future<Output = Result<SubmissionOutcome, ApiError>> + 'static,
{
    let Some(request) = form.try_update(|state| gate(state, request)).flatten() else {
        return false;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let endpoint = form.with_untracked(|state| state.kind.endpoint());
        log::info!("submitting {endpoint}");
        let result = request.await;
        match &result {
            Ok(outcome) if !outcome.success => log::info!("{endpoint} rejected submission"),
            Ok(_) => {}
            Err(e) => log::warn!("{endpoint} failed: {e}"),
        }
        // `None` means the page was unmounted while the request was in flight.
        let Some(resolution) = form.try_update(|state| state.resolve(result)) else {
            return;
        };
        follow_up(form, resolution).await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(request);

    true
}

#[cfg(feature = "hydrate")]
async fn follow_up(form: RwSignal<AuthFormState>, resolution: Resolution) {
    match resolution {
        Resolution::Redirect { target, delay } => {
            gloo_timers::future::sleep(delay).await;
            crate::util::navigation::navigate_to(&target);
        }
        Resolution::Retry {
            ticket,
            dismiss_after: Some(ttl),
        } => {
            gloo_timers::future::sleep(ttl).await;
            form.try_update(|state| state.feedback.dismiss(ticket));
        }
        Resolution::Retry { dismiss_after: None, .. } => {}
    }
}

use super::*;
use crate::state::feedback::{BannerKind, FeedbackState};

/// Server-render a form whose banner slot holds `banner`, ahead of one field.
fn render_form(banner: Option<Banner>) -> String {
    Owner::new().with(move || {
        let banner = Signal::derive(move || banner.clone());
        view! {
            <form id="signinForm">
                <FeedbackBanner banner=banner/>
                <input id="email" type="email"/>
            </form>
        }
        .to_html()
    })
}

fn banner(kind: BannerKind, message: &str) -> Option<Banner> {
    let mut feedback = FeedbackState::default();
    feedback.show(kind, message);
    feedback.current().cloned()
}

#[test]
fn server_error_text_is_escaped() {
    let html = render_form(banner(BannerKind::Error, "<b>x</b>"));
    assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"), "{html}");
    assert!(!html.contains("<b>"), "{html}");
}

#[test]
fn banner_renders_before_form_fields() {
    let html = render_form(banner(BannerKind::Error, "Identifiants incorrects"));
    let banner_at = html.find("error-message").expect("banner rendered");
    let field_at = html.find("<input").expect("field rendered");
    assert!(banner_at < field_at, "{html}");
}

#[test]
fn success_banner_uses_success_class() {
    let html = render_form(banner(BannerKind::Success, "Connexion réussie !"));
    assert!(html.contains("success-message"), "{html}");
    assert!(!html.contains("error-message"), "{html}");
}

#[test]
fn empty_slot_renders_no_banner() {
    let html = render_form(None);
    assert!(!html.contains("role=\"alert\""), "{html}");
}

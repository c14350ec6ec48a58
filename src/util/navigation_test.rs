use std::collections::HashSet;

use super::*;

// =============================================================
// Targets
// =============================================================

#[test]
fn home_controls_lead_to_signin() {
    assert_eq!(NavControl::HomeSignIn.target(), "/signin.html");
    assert_eq!(NavControl::HomeAssistant.target(), "/signin.html");
}

#[test]
fn dashboard_assistant_goes_to_assistant_page() {
    assert_eq!(NavControl::Assistant.target(), "/assistant.html");
}

#[test]
fn logout_targets_host_endpoint() {
    assert_eq!(NavControl::Logout.target(), "/api/logout");
}

#[test]
fn page_targets_are_absolute_html_paths() {
    let all = [DASHBOARD_CONTROLS, ADMIN_CONTROLS, TEACHER_CONTROLS].concat();
    for control in all {
        let target = control.target();
        assert!(target.starts_with('/'), "{control:?} -> {target}");
        assert!(
            std::path::Path::new(target)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("html")),
            "{control:?} -> {target}"
        );
    }
}

#[test]
fn admin_and_teacher_tables_have_expected_pages() {
    let admin: Vec<_> = ADMIN_CONTROLS.iter().map(|c| c.target()).collect();
    assert_eq!(
        admin,
        [
            "/admin-annonces.html",
            "/admin-infos.html",
            "/admin-users.html",
            "/admin-demandes.html",
            "/admin-presence.html",
            "/admin-config.html",
        ]
    );
    let teacher: Vec<_> = TEACHER_CONTROLS.iter().map(|c| c.target()).collect();
    assert_eq!(
        teacher,
        [
            "/teacher-upload.html",
            "/teacher-ressources.html",
            "/teacher-presence.html",
            "/teacher-rapports.html",
        ]
    );
}

// =============================================================
// Element ids
// =============================================================

/// Every navigation control each page renders, grid and standalone buttons.
fn rendered_controls() -> Vec<(&'static str, Vec<NavControl>)> {
    vec![
        ("home", [HOME_CONTROLS, &[NavControl::HomeAssistant][..]].concat()),
        (
            "dashboard",
            [DASHBOARD_CONTROLS, &[NavControl::AssistantBubble, NavControl::Logout][..]].concat(),
        ),
        ("admin", [ADMIN_CONTROLS, &[NavControl::Logout][..]].concat()),
        ("teacher", [TEACHER_CONTROLS, &[NavControl::Logout][..]].concat()),
    ]
}

#[test]
fn element_ids_are_unique_within_each_page() {
    for (page, controls) in rendered_controls() {
        let ids: HashSet<_> = controls.iter().map(|c| c.element_id()).collect();
        assert_eq!(ids.len(), controls.len(), "duplicate element id on {page}");
    }
}

#[test]
fn dashboard_card_and_bubble_have_distinct_ids_same_target() {
    assert_eq!(NavControl::Assistant.element_id(), "assistantBtn");
    assert_eq!(NavControl::AssistantBubble.element_id(), "aiAssistantBtn");
    assert_eq!(NavControl::Assistant.target(), NavControl::AssistantBubble.target());
}

// =============================================================
// Messages and browser stubs
// =============================================================

#[test]
fn file_selected_message_includes_name() {
    assert_eq!(file_selected_message("cours1.pdf"), "Fichier sélectionné: cours1.pdf");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_noops_outside_browser() {
    navigate_to("/quiz.html");
    notify("hello");
}

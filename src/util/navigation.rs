//! Control-to-page navigation table and browser navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Portal pages are rendered by the host, not by the client router, so every
//! navigation here is a full page load. Each page lists its controls as a
//! static slice of [`NavControl`] and renders them with the same handler.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::config::{LOGOUT_ENDPOINT, SIGNIN_PAGE};

/// A button that navigates somewhere when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavControl {
    HomeSignIn,
    HomeAssistant,
    Courses,
    Assistant,
    /// Floating assistant bubble shown on the dashboard.
    AssistantBubble,
    Quiz,
    StudyPlanner,
    Summarize,
    Documents,
    Notes,
    Presence,
    AdminAnnouncements,
    AdminCampusInfo,
    AdminUsers,
    AdminDocuments,
    AdminAttendance,
    AdminConfig,
    TeacherUpload,
    TeacherMaterials,
    TeacherAttendance,
    TeacherReports,
    Logout,
}

pub const HOME_CONTROLS: &[NavControl] = &[NavControl::HomeSignIn];

pub const DASHBOARD_CONTROLS: &[NavControl] = &[
    NavControl::Courses,
    NavControl::Assistant,
    NavControl::Quiz,
    NavControl::StudyPlanner,
    NavControl::Summarize,
    NavControl::Documents,
    NavControl::Notes,
    NavControl::Presence,
];

pub const ADMIN_CONTROLS: &[NavControl] = &[
    NavControl::AdminAnnouncements,
    NavControl::AdminCampusInfo,
    NavControl::AdminUsers,
    NavControl::AdminDocuments,
    NavControl::AdminAttendance,
    NavControl::AdminConfig,
];

pub const TEACHER_CONTROLS: &[NavControl] = &[
    NavControl::TeacherUpload,
    NavControl::TeacherMaterials,
    NavControl::TeacherAttendance,
    NavControl::TeacherReports,
];

impl NavControl {
    /// Page the control navigates to.
    pub fn target(self) -> &'static str {
        match self {
            // Unauthenticated visitors must sign in before using the assistant.
            Self::HomeSignIn | Self::HomeAssistant => SIGNIN_PAGE,
            Self::Courses => "/cours.html",
            Self::Assistant | Self::AssistantBubble => "/assistant.html",
            Self::Quiz => "/quiz.html",
            Self::StudyPlanner => "/study-planner.html",
            Self::Summarize => "/summarize.html",
            Self::Documents => "/documents.html",
            Self::Notes => "/notes.html",
            Self::Presence => "/presence.html",
            Self::AdminAnnouncements => "/admin-annonces.html",
            Self::AdminCampusInfo => "/admin-infos.html",
            Self::AdminUsers => "/admin-users.html",
            Self::AdminDocuments => "/admin-demandes.html",
            Self::AdminAttendance => "/admin-presence.html",
            Self::AdminConfig => "/admin-config.html",
            Self::TeacherUpload => "/teacher-upload.html",
            Self::TeacherMaterials => "/teacher-ressources.html",
            Self::TeacherAttendance => "/teacher-presence.html",
            Self::TeacherReports => "/teacher-rapports.html",
            Self::Logout => LOGOUT_ENDPOINT,
        }
    }

    /// DOM id, kept stable for the host stylesheets.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::HomeSignIn => "signInBtn",
            Self::HomeAssistant | Self::AssistantBubble => "aiAssistantBtn",
            Self::Assistant => "assistantBtn",
            Self::Courses => "coursBtn",
            Self::Quiz => "quizBtn",
            Self::StudyPlanner => "studyPlannerBtn",
            Self::Summarize => "summarizeBtn",
            Self::Documents => "documentsBtn",
            Self::Notes => "notesBtn",
            Self::Presence => "presenceBtn",
            Self::AdminAnnouncements => "announcementsBtn",
            Self::AdminCampusInfo => "campusInfoBtn",
            Self::AdminUsers => "usersBtn",
            Self::AdminDocuments => "documentsAdminBtn",
            Self::AdminAttendance => "attendanceStatsBtn",
            Self::AdminConfig => "configBtn",
            Self::TeacherUpload => "uploadCourseBtn",
            Self::TeacherMaterials => "manageMaterialsBtn",
            Self::TeacherAttendance => "attendanceBtn",
            Self::TeacherReports => "reportsBtn",
            Self::Logout => "logoutBtn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HomeSignIn => "Se connecter",
            Self::HomeAssistant | Self::Assistant | Self::AssistantBubble => "Assistant IA",
            Self::Courses => "Cours",
            Self::Quiz => "Quiz",
            Self::StudyPlanner => "Planning d'étude",
            Self::Summarize => "Résumés",
            Self::Documents => "Documents",
            Self::Notes => "Notes",
            Self::Presence => "Présence",
            Self::AdminAnnouncements => "Annonces",
            Self::AdminCampusInfo => "Infos campus",
            Self::AdminUsers => "Utilisateurs",
            Self::AdminDocuments => "Demandes de documents",
            Self::AdminAttendance => "Statistiques de présence",
            Self::AdminConfig => "Configuration",
            Self::TeacherUpload => "Déposer un cours",
            Self::TeacherMaterials => "Gérer les ressources",
            Self::TeacherAttendance => "Présence",
            Self::TeacherReports => "Rapports",
            Self::Logout => "Déconnexion",
        }
    }
}

/// Message shown after a course file is picked on the teacher page.
pub fn file_selected_message(file_name: &str) -> String {
    format!("Fichier sélectionné: {file_name}")
}

/// Full-page navigation to `href`.
pub fn navigate_to(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("navigating to {href}");
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                log::warn!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Blocking browser alert for actions that have no backend yet.
pub fn notify(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, home::HomePage, signin::SignInPage, signup::SignUpPage,
    teacher::TeacherPage,
};

/// HTML shell rendered by the host for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Route paths keep the `.html` names the host and its links already use.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-portal.css"/>
        <Title text="Portail Universitaire"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("accueil.html") view=HomePage/>
                <Route path=StaticSegment("signin.html") view=SignInPage/>
                <Route path=StaticSegment("signup.html") view=SignUpPage/>
                <Route path=StaticSegment("dashboard.html") view=DashboardPage/>
                <Route path=StaticSegment("admin.html") view=AdminPage/>
                <Route path=StaticSegment("teacher.html") view=TeacherPage/>
            </Routes>
        </Router>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::pages::{
    activities::ActivitiesPage, company::CompanyPage, dashboard::DashboardLayout, employees::EmployeesPage,
    insights::InsightsPage, login::LoginPage, overview::OverviewPage,
};
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the session context and sets up client-side routing. Everything
/// under `/dashboard` is nested inside the guarded layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-console.css"/>
        <Title text="SaaS Platform"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("company") view=CompanyPage/>
                    <Route path=StaticSegment("employees") view=EmployeesPage/>
                    <Route path=StaticSegment("activities") view=ActivitiesPage/>
                    <Route path=StaticSegment("ai") view=InsightsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

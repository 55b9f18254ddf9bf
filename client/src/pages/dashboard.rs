//! Guarded dashboard shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/dashboard/*` route renders inside this layout. The route guard
//! decides whether the sidebar and nested page may render: while the
//! identity is being checked, or while redirecting to login after a failed
//! check, only a loading indicator is shown.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::feedback::LoadingIndicator;
use crate::components::sidebar::Sidebar;
use crate::state::session::use_session;
use crate::util::auth::{install_guard_redirect, mount_guard, pending_message};

/// Layout wrapping all protected pages.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = use_session();
    let guard = mount_guard(session);
    install_guard_redirect(guard, use_navigate());

    view! {
        <Show
            when=move || guard.get().renders_children()
            fallback=move || view! { <LoadingIndicator label=pending_message(&guard.get())/> }
        >
            <div class="dashboard-layout">
                <Sidebar/>
                <main class="dashboard-layout__main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}

//! Dashboard navigation sidebar with identity and logout.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::{Role, RouteGuard};

use crate::state::session::{display_email, logout, use_session};

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub admin_only: bool,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { href: "/dashboard", label: "Dashboard", admin_only: false },
    NavItem { href: "/dashboard/company", label: "Company Settings", admin_only: true },
    NavItem { href: "/dashboard/employees", label: "Employees", admin_only: true },
    NavItem { href: "/dashboard/activities", label: "Audit Logs", admin_only: false },
    NavItem { href: "/dashboard/ai", label: "AI Insights", admin_only: false },
];

/// Links visible to a user with `role`.
pub fn visible_nav_items(role: Option<Role>) -> Vec<NavItem> {
    let is_admin = role.is_some_and(Role::is_admin);
    NAV_ITEMS.into_iter().filter(|item| is_admin || !item.admin_only).collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logged_out = RwSignal::new(false);

    Effect::new(move || {
        if logged_out.get() {
            navigate(RouteGuard::LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        logout(session);
        logged_out.set(true);
    };

    view! {
        <Show when=move || session.get().is_authenticated()>
            <aside class="sidebar">
                <div class="sidebar__brand">"SaaS Platform"</div>
                <nav class="sidebar__nav">
                    {move || {
                        visible_nav_items(session.get().role())
                            .into_iter()
                            .map(|item| view! { <a class="sidebar__link" href=item.href>{item.label}</a> })
                            .collect::<Vec<_>>()
                    }}
                </nav>
                <div class="sidebar__footer">
                    <div class="sidebar__email">{move || display_email(&session.get())}</div>
                    <button class="btn sidebar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </aside>
        </Show>
    }
}

//! Platform overview: summary counters for the current tenant.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;
use portal::types::DashboardMetrics;

use crate::components::feedback::{InlineNotice, LoadingIndicator, Notice};
use crate::state::session::{display_email, use_session};

#[cfg(feature = "hydrate")]
const METRICS_FAILED: &str = "Failed to load dashboard metrics.";

/// Greeting line naming the user and their company.
pub(crate) fn welcome_line(email: &str, metrics: Option<&DashboardMetrics>) -> String {
    let company = metrics
        .and_then(|m| m.company_name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or("your company");
    format!("Welcome back, {email}. Here's what's happening at {company}.")
}

/// Company status card value: each word's first letter uppercased, the
/// rest left as sent (`ACTIVE` stays `ACTIVE`).
pub(crate) fn status_label(metrics: Option<&DashboardMetrics>) -> String {
    let Some(raw) = metrics.and_then(|m| m.company_status.as_deref()).filter(|s| !s.trim().is_empty()) else {
        return "Unknown".to_owned();
    };
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let session = use_session();
    let metrics = RwSignal::new(None::<DashboardMetrics>);
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use portal::PortalApi;

        match crate::net::api::BrowserApi::new().dashboard_metrics().await {
            Ok(loaded) => metrics.set(Some(loaded)),
            Err(e) => {
                log::error!("failed to load metrics: {e}");
                notice.set(Some(Notice::error(e.user_message(METRICS_FAILED))));
            }
        }
        loading.set(false);
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
            <section class="overview">
                <h1>"Platform Overview"</h1>
                <p class="overview__welcome">
                    {move || welcome_line(&display_email(&session.get()), metrics.get().as_ref())}
                </p>
                <InlineNotice notice=notice/>
                <div class="overview__cards">
                    <div class="card">
                        <h3>"Total Users"</h3>
                        <div class="card__value">
                            {move || metrics.get().map_or(0, |m| m.total_users)}
                        </div>
                    </div>
                    <div class="card">
                        <h3>"Company Status"</h3>
                        <div class="card__value">{move || status_label(metrics.get().as_ref())}</div>
                    </div>
                </div>
            </section>
        </Show>
    }
}

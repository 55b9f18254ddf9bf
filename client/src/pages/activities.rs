//! Audit logs for the current tenant.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use leptos::prelude::*;
use portal::types::ActivityLog;

use crate::components::feedback::{InlineNotice, LoadingIndicator, Notice};
use crate::util::format::format_short_datetime;

#[cfg(any(test, feature = "hydrate"))]
const LOAD_FAILED: &str = "Failed to load activity logs.";
const NO_DETAILS: &str = "No additional details provided.";

/// `USER_CREATED` -> `USER CREATED`
pub(crate) fn action_label(action: &str) -> String {
    action.replace('_', " ")
}

pub(crate) fn details_text(log: &ActivityLog) -> &str {
    log.details.as_deref().filter(|d| !d.trim().is_empty()).unwrap_or(NO_DETAILS)
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let logs = RwSignal::new(Vec::<ActivityLog>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use portal::PortalApi;

        match crate::net::api::BrowserApi::new().activities().await {
            Ok(list) => logs.set(list),
            Err(e) => notice.set(Some(Notice::error(e.user_message(LOAD_FAILED)))),
        }
        loading.set(false);
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
            <section class="activities">
                <header class="page-header">
                    <h1>"Audit Logs"</h1>
                    <p>"Recent activity across your company."</p>
                </header>
                <InlineNotice notice=notice/>
                <ul class="activity-list">
                    {move || {
                        let entries = logs.get();
                        if entries.is_empty() {
                            return view! {
                                <li class="activity-list__empty">"No activity logs found for your company."</li>
                            }
                                .into_any();
                        }
                        entries
                            .into_iter()
                            .map(|log| {
                                view! {
                                    <li class="activity">
                                        <div class="activity__head">
                                            <span class="activity__action">{action_label(&log.action)}</span>
                                            <time class="activity__time" datetime=log.timestamp.clone()>
                                                {format_short_datetime(&log.timestamp)}
                                            </time>
                                        </div>
                                        <p class="activity__details">{details_text(&log).to_owned()}</p>
                                        <span class="activity__user">{format!("User #{}", log.user_id)}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </ul>
            </section>
        </Show>
    }
}

//! AI insights panel. The backend returns canned analysis; the page only
//! triggers generation and renders it.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use leptos::prelude::*;
use portal::types::AiInsights;

use crate::components::feedback::{InlineNotice, LoadingIndicator, Notice};
use crate::util::format::format_datetime;

#[cfg(any(test, feature = "hydrate"))]
const GENERATE_FAILED: &str = "Failed to generate AI insights.";

/// Qualitative band for a productivity score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub(crate) fn of(score: f64) -> Self {
        if score >= 80.0 {
            Self::High
        } else if score >= 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::High => "score score--high",
            Self::Medium => "score score--medium",
            Self::Low => "score score--low",
        }
    }
}

/// Score text, `N/A` when the backend omitted it.
pub(crate) fn score_text(score: Option<f64>) -> String {
    score.map_or_else(|| "N/A".to_owned(), |s| format!("{s:.0}"))
}

pub(crate) fn generated_at_text(insights: &AiInsights) -> String {
    insights
        .generated_at
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map_or_else(|| "N/A".to_owned(), format_datetime)
}

#[component]
pub fn InsightsPage() -> impl IntoView {
    let insights = RwSignal::new(None::<AiInsights>);
    let loading = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let generate = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use portal::PortalApi;

            match crate::net::api::BrowserApi::new().ai_insights().await {
                Ok(loaded) => insights.set(Some(loaded)),
                Err(e) => notice.set(Some(Notice::error(e.user_message(GENERATE_FAILED)))),
            }
            loading.set(false);
        });
    };

    generate();

    view! {
        <section class="insights">
            <header class="page-header">
                <div>
                    <h1>"AI Insights"</h1>
                    <p>"Generated analysis of your company's activity."</p>
                </div>
                <button class="btn btn--primary" disabled=move || loading.get() on:click=move |_| generate()>
                    {move || if loading.get() { "Generating..." } else { "Regenerate" }}
                </button>
            </header>
            <InlineNotice notice=notice/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator label="Analyzing company data..."/> }>
                {move || {
                    insights
                        .get()
                        .map(|report| {
                            let band = report.productivity_score.map(ScoreBand::of);
                            view! {
                                <div class="insights__summary">
                                    <div class=band.map_or("score", ScoreBand::class)>
                                        <h3>"Productivity Score"</h3>
                                        <span class="score__value">{score_text(report.productivity_score)}</span>
                                    </div>
                                    <p class="insights__meta">
                                        {format!("Generated at {}", generated_at_text(&report))}
                                        {report.generated_by.clone().map(|by| format!(" by {by}"))}
                                    </p>
                                </div>
                                <ul class="insights__list">
                                    {report
                                        .insights
                                        .iter()
                                        .map(|line| view! { <li>{line.clone()}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Show>
        </section>
    }
}

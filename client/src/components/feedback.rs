//! Loading and inline-message components.

use leptos::prelude::*;

/// Spinner shown while data or the session is pending.
#[component]
pub fn LoadingIndicator(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}

/// Severity of an inline message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message rendered inline on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Render `notice` if set; nothing otherwise.
#[component]
pub fn InlineNotice(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            view! { <div class=class role="alert">{notice.text}</div> }
        })
    }
}

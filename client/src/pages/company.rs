//! Company settings: view and edit the tenant profile.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

use leptos::prelude::*;
use portal::types::{Company, CompanyStatus, CompanyUpdate};

use crate::components::feedback::{InlineNotice, LoadingIndicator, Notice};
use crate::util::format::format_date;

#[cfg(any(test, feature = "hydrate"))]
const LOAD_FAILED: &str = "Failed to load company details";
#[cfg(any(test, feature = "hydrate"))]
const SAVE_FAILED: &str = "Failed to update company settings";
#[cfg(any(test, feature = "hydrate"))]
const SAVED: &str = "Company settings updated successfully";
#[cfg(feature = "hydrate")]
const NOTICE_CLEAR_SECS: u64 = 3;

/// Fields that differ from the loaded profile. Names are trimmed.
pub(crate) fn pending_update(company: &Company, name: &str, status: CompanyStatus) -> CompanyUpdate {
    let name = name.trim();
    CompanyUpdate {
        name: (name != company.name).then(|| name.to_owned()),
        status: (status != company.status).then_some(status),
    }
}

/// Save is enabled only with a loaded profile, a non-empty name, at least
/// one change, and no save in flight.
pub(crate) fn can_save(company: Option<&Company>, name: &str, status: CompanyStatus, saving: bool) -> bool {
    let Some(company) = company else {
        return false;
    };
    !saving && !name.trim().is_empty() && !pending_update(company, name, status).is_empty()
}

#[component]
pub fn CompanyPage() -> impl IntoView {
    let company = RwSignal::new(None::<Company>);
    let name = RwSignal::new(String::new());
    let status = RwSignal::new(CompanyStatus::Active);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use portal::PortalApi;

        match crate::net::api::BrowserApi::new().company().await {
            Ok(loaded) => {
                name.set(loaded.name.clone());
                status.set(loaded.status);
                company.set(Some(loaded));
            }
            Err(e) => notice.set(Some(Notice::error(e.user_message(LOAD_FAILED)))),
        }
        loading.set(false);
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = company.get_untracked() else {
            return;
        };
        if !can_save(Some(&current), &name.get_untracked(), status.get_untracked(), saving.get_untracked()) {
            return;
        }
        let update = pending_update(&current, &name.get_untracked(), status.get_untracked());
        saving.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use portal::PortalApi;

            match crate::net::api::BrowserApi::new().update_company(&update).await {
                Ok(saved) => {
                    name.set(saved.name.clone());
                    status.set(saved.status);
                    company.set(Some(saved));
                    let success = Notice::success(SAVED);
                    notice.set(Some(success.clone()));
                    saving.set(false);
                    gloo_timers::future::sleep(std::time::Duration::from_secs(NOTICE_CLEAR_SECS)).await;
                    if notice.get_untracked().as_ref() == Some(&success) {
                        notice.set(None);
                    }
                }
                Err(e) => {
                    notice.set(Some(Notice::error(e.user_message(SAVE_FAILED))));
                    saving.set(false);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
            <section class="company">
                <h1>"Company Settings"</h1>
                <InlineNotice notice=notice/>
                <form class="company__form" on:submit=on_save>
                    <h2>"General Information"</h2>
                    <label class="form__label">
                        "Company Name"
                        <input
                            class="form__input"
                            type="text"
                            required
                            placeholder="e.g. Acme Corp"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Account Status"
                        <select
                            class="form__input"
                            prop:value=move || status.get().as_str()
                            on:change=move |ev| status.set(CompanyStatus::parse(&event_target_value(&ev)))
                        >
                            {CompanyStatus::SELECTABLE
                                .into_iter()
                                .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    {move || {
                        company
                            .get()
                            .map(|c| {
                                view! {
                                    <div class="company__meta">
                                        <span>{format!("Company ID: {}", c.id)}</span>
                                        <span>{format!("Registered: {}", format_date(&c.created_at))}</span>
                                    </div>
                                }
                            })
                    }}
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || !can_save(company.get().as_ref(), &name.get(), status.get(), saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </section>
        </Show>
    }
}

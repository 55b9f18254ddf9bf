//! Employees: list tenant members, add them, change roles, remove them.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use leptos::prelude::*;
use portal::types::{Employee, NewEmployee, Role, RoleUpdate};

use crate::components::feedback::{InlineNotice, LoadingIndicator, Notice};
use crate::state::session::use_session;
use crate::util::format::date_or_na;

#[cfg(any(test, feature = "hydrate"))]
const LOAD_FAILED: &str = "Failed to load employees.";
#[cfg(any(test, feature = "hydrate"))]
const SAVE_FAILED: &str = "Failed to save changes.";
#[cfg(any(test, feature = "hydrate"))]
const DELETE_FAILED: &str = "Failed to delete employee.";
#[cfg(feature = "hydrate")]
const DELETE_CONFIRM: &str = "Are you sure you want to remove this employee?";

/// Roles an admin can assign.
pub(crate) const ASSIGNABLE_ROLES: [Role; 2] = [Role::Employee, Role::CompanyAdmin];

/// Which modal is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum EmployeeModal {
    Add,
    Edit(Employee),
}

impl EmployeeModal {
    pub(crate) fn title(&self) -> &'static str {
        match self {
            Self::Add => "Add New Employee",
            Self::Edit(_) => "Edit Employee Role",
        }
    }
}

/// Request the modal submit resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum EmployeeAction {
    Create(NewEmployee),
    UpdateRole { id: i64, update: RoleUpdate },
}

/// Validate the modal form and build the request to send.
pub(crate) fn build_action(
    modal: &EmployeeModal,
    email: &str,
    password: &str,
    role: Role,
) -> Result<EmployeeAction, &'static str> {
    if !ASSIGNABLE_ROLES.contains(&role) {
        return Err("Choose a valid role.");
    }
    match modal {
        EmployeeModal::Add => {
            let email = email.trim();
            if email.is_empty() || password.is_empty() {
                return Err("Email and password are required.");
            }
            Ok(EmployeeAction::Create(NewEmployee { email: email.to_owned(), password: password.to_owned(), role }))
        }
        EmployeeModal::Edit(employee) => Ok(EmployeeAction::UpdateRole { id: employee.id, update: RoleUpdate { role } }),
    }
}

/// Role badge text: the first underscore becomes a space.
pub(crate) fn role_label(role: Role) -> String {
    role.as_str().replacen('_', " ", 1)
}

/// Users may not remove their own account.
pub(crate) fn can_delete(self_id: Option<i64>, employee_id: i64) -> bool {
    self_id != Some(employee_id)
}

/// Drop a removed row without refetching.
pub(crate) fn remove_employee(list: &mut Vec<Employee>, id: i64) {
    list.retain(|employee| employee.id != id);
}

#[cfg(feature = "hydrate")]
fn load_employees(employees: RwSignal<Vec<Employee>>, loading: RwSignal<bool>, notice: RwSignal<Option<Notice>>) {
    leptos::task::spawn_local(async move {
        use portal::PortalApi;

        match crate::net::api::BrowserApi::new().employees().await {
            Ok(list) => employees.set(list),
            Err(e) => notice.set(Some(Notice::error(e.user_message(LOAD_FAILED)))),
        }
        loading.set(false);
    });
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let session = use_session();
    let employees = RwSignal::new(Vec::<Employee>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let modal = RwSignal::new(None::<EmployeeModal>);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Employee);
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<Notice>);

    #[cfg(feature = "hydrate")]
    load_employees(employees, loading, notice);

    let self_id = move || session.get().user().map(|user| user.id);

    let open_add = move |_| {
        email.set(String::new());
        password.set(String::new());
        role.set(Role::Employee);
        form_error.set(None);
        modal.set(Some(EmployeeModal::Add));
    };

    let open_edit = move |employee: Employee| {
        role.set(employee.role);
        form_error.set(None);
        modal.set(Some(EmployeeModal::Edit(employee)));
    };

    let on_delete = move |id: i64| {
        if !can_delete(self_id(), id) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(DELETE_CONFIRM).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                use portal::PortalApi;

                match crate::net::api::BrowserApi::new().delete_employee(id).await {
                    Ok(()) => employees.update(|list| remove_employee(list, id)),
                    Err(e) => notice.set(Some(Notice::error(e.user_message(DELETE_FAILED)))),
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(current) = modal.get_untracked() else {
            return;
        };
        let action = match build_action(&current, &email.get_untracked(), &password.get_untracked(), role.get_untracked()) {
            Ok(action) => action,
            Err(message) => {
                form_error.set(Some(Notice::error(message)));
                return;
            }
        };
        saving.set(true);
        form_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use portal::PortalApi;

            let api = crate::net::api::BrowserApi::new();
            let result = match &action {
                EmployeeAction::Create(new_employee) => api.create_employee(new_employee).await,
                EmployeeAction::UpdateRole { id, update } => api.update_employee_role(*id, update).await,
            };
            match result {
                Ok(()) => {
                    modal.set(None);
                    load_employees(employees, loading, notice);
                }
                Err(e) => form_error.set(Some(Notice::error(e.user_message(SAVE_FAILED)))),
            }
            saving.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = action;
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
            <section class="employees">
                <header class="page-header">
                    <div>
                        <h1>"Employees"</h1>
                        <p>"Manage access and roles for your team members."</p>
                    </div>
                    <button class="btn btn--primary" on:click=open_add>
                        "Add Employee"
                    </button>
                </header>
                <InlineNotice notice=notice/>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Added Date"</th>
                            <th class="table__actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = employees.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="4" class="table__empty">
                                            "No employees found. Add one to get started."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let current = self_id();
                            rows.into_iter()
                                .map(|employee| {
                                    let id = employee.id;
                                    let is_self = !can_delete(current, id);
                                    let edit_target = employee.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                {employee.email.clone()}
                                                {is_self.then(|| view! { <span class="badge badge--self">"You"</span> })}
                                            </td>
                                            <td>
                                                <span class="badge">{role_label(employee.role)}</span>
                                            </td>
                                            <td>{date_or_na(employee.created_at.as_deref())}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--icon"
                                                    title="Edit Role"
                                                    on:click=move |_| open_edit(edit_target.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--icon btn--danger"
                                                    title="Remove Employee"
                                                    disabled=is_self
                                                    on:click=move |_| on_delete(id)
                                                >
                                                    "Remove"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </section>

            <Show when=move || modal.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| modal.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h3>{move || modal.get().map(|m| m.title()).unwrap_or_default()}</h3>
                        <form class="dialog__form" on:submit=on_submit>
                            <InlineNotice notice=form_error/>
                            <Show when=move || matches!(modal.get(), Some(EmployeeModal::Add))>
                                <label class="form__label">
                                    "Email"
                                    <input
                                        class="form__input"
                                        type="email"
                                        required
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form__label">
                                    "Password"
                                    <input
                                        class="form__input"
                                        type="password"
                                        required
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </label>
                            </Show>
                            <label class="form__label">
                                "Role"
                                <select
                                    class="form__input"
                                    prop:value=move || role.get().as_str()
                                    on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)))
                                >
                                    {ASSIGNABLE_ROLES
                                        .into_iter()
                                        .map(|option| view! { <option value=option.as_str()>{role_label(option)}</option> })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <div class="dialog__actions">
                                <button class="btn" type="button" on:click=move |_| modal.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </Show>
    }
}

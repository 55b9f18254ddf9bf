use super::*;

fn employee(id: i64, role: Role) -> Employee {
    Employee {
        id,
        email: format!("e{id}@acme.test"),
        role,
        created_at: Some("2024-03-04T05:06:07".to_owned()),
    }
}

// =============================================================
// build_action
// =============================================================

#[test]
fn add_builds_create_request_with_trimmed_email() {
    let action = build_action(&EmployeeModal::Add, " new@acme.test ", "pw", Role::Employee).unwrap();
    assert_eq!(
        action,
        EmployeeAction::Create(NewEmployee {
            email: "new@acme.test".to_owned(),
            password: "pw".to_owned(),
            role: Role::Employee,
        })
    );
}

#[test]
fn add_requires_email_and_password() {
    assert_eq!(build_action(&EmployeeModal::Add, "", "pw", Role::Employee), Err("Email and password are required."));
    assert_eq!(build_action(&EmployeeModal::Add, "a@b.com", "", Role::Employee), Err("Email and password are required."));
}

#[test]
fn edit_builds_role_update_ignoring_credentials() {
    let modal = EmployeeModal::Edit(employee(9, Role::Employee));
    let action = build_action(&modal, "", "", Role::CompanyAdmin).unwrap();
    assert_eq!(action, EmployeeAction::UpdateRole { id: 9, update: RoleUpdate { role: Role::CompanyAdmin } });
}

#[test]
fn unknown_role_is_rejected() {
    assert_eq!(build_action(&EmployeeModal::Add, "a@b.com", "pw", Role::Unknown), Err("Choose a valid role."));
}

#[test]
fn modal_titles_follow_mode() {
    assert_eq!(EmployeeModal::Add.title(), "Add New Employee");
    assert_eq!(EmployeeModal::Edit(employee(1, Role::Employee)).title(), "Edit Employee Role");
}

// =============================================================
// Row helpers
// =============================================================

#[test]
fn role_label_replaces_first_underscore() {
    assert_eq!(role_label(Role::CompanyAdmin), "COMPANY ADMIN");
    assert_eq!(role_label(Role::Employee), "EMPLOYEE");
}

#[test]
fn current_user_cannot_delete_self() {
    assert!(!can_delete(Some(4), 4));
    assert!(can_delete(Some(4), 5));
    assert!(can_delete(None, 5));
}

#[test]
fn remove_employee_drops_only_matching_row() {
    let mut list = vec![employee(1, Role::CompanyAdmin), employee(2, Role::Employee), employee(3, Role::Employee)];
    remove_employee(&mut list, 2);
    assert_eq!(list.iter().map(|e| e.id).collect::<Vec<_>>(), [1, 3]);
    remove_employee(&mut list, 42);
    assert_eq!(list.len(), 2);
}

#[test]
fn error_fallbacks_match_copy() {
    let err = portal::ApiError::Transport("offline".to_owned());
    assert_eq!(err.user_message(LOAD_FAILED), "Failed to load employees.");
    assert_eq!(err.user_message(SAVE_FAILED), "Failed to save changes.");
    assert_eq!(err.user_message(DELETE_FAILED), "Failed to delete employee.");
}

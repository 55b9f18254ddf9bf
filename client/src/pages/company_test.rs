use super::*;

fn company() -> Company {
    Company {
        id: 3,
        name: "Acme".to_owned(),
        status: CompanyStatus::Active,
        created_at: "2024-01-02T00:00:00".to_owned(),
    }
}

// =============================================================
// pending_update
// =============================================================

#[test]
fn pending_update_is_empty_when_unchanged() {
    assert!(pending_update(&company(), "Acme", CompanyStatus::Active).is_empty());
    assert!(pending_update(&company(), "  Acme ", CompanyStatus::Active).is_empty());
}

#[test]
fn pending_update_carries_only_changed_fields() {
    let update = pending_update(&company(), "Acme Corp", CompanyStatus::Active);
    assert_eq!(update, CompanyUpdate { name: Some("Acme Corp".to_owned()), status: None });

    let update = pending_update(&company(), "Acme", CompanyStatus::Suspended);
    assert_eq!(update, CompanyUpdate { name: None, status: Some(CompanyStatus::Suspended) });
}

// =============================================================
// can_save
// =============================================================

#[test]
fn can_save_requires_loaded_profile() {
    assert!(!can_save(None, "Acme Corp", CompanyStatus::Active, false));
}

#[test]
fn can_save_disabled_while_saving_or_unchanged() {
    let c = company();
    assert!(!can_save(Some(&c), "Acme", CompanyStatus::Active, false));
    assert!(!can_save(Some(&c), "Acme Corp", CompanyStatus::Active, true));
    assert!(can_save(Some(&c), "Acme Corp", CompanyStatus::Active, false));
}

#[test]
fn can_save_rejects_blank_name() {
    assert!(!can_save(Some(&company()), "   ", CompanyStatus::Inactive, false));
}

#[test]
fn messages_match_copy() {
    assert_eq!(SAVED, "Company settings updated successfully");
    assert_eq!(
        portal::ApiError::Unauthorized.user_message(LOAD_FAILED),
        "Failed to load company details"
    );
    assert_eq!(
        portal::ApiError::Rejected { status: 400, detail: Some("Name taken".to_owned()) }.user_message(SAVE_FAILED),
        "Name taken"
    );
}

use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_deserializes_screaming_snake_case() {
    let role: Role = serde_json::from_str("\"COMPANY_ADMIN\"").unwrap();
    assert_eq!(role, Role::CompanyAdmin);
    let role: Role = serde_json::from_str("\"EMPLOYEE\"").unwrap();
    assert_eq!(role, Role::Employee);
}

#[test]
fn role_unknown_string_does_not_fail() {
    let role: Role = serde_json::from_str("\"SUPER_ADMIN\"").unwrap();
    assert_eq!(role, Role::Unknown);
}

#[test]
fn role_parse_matches_wire_names() {
    assert_eq!(Role::parse("COMPANY_ADMIN"), Role::CompanyAdmin);
    assert_eq!(Role::parse("EMPLOYEE"), Role::Employee);
    assert_eq!(Role::parse("employee"), Role::Unknown);
    assert_eq!(Role::CompanyAdmin.as_str(), "COMPANY_ADMIN");
}

#[test]
fn role_default_is_employee() {
    assert_eq!(Role::default(), Role::Employee);
    assert!(!Role::default().is_admin());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_from_me_payload() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "email": "a@b.com",
        "role": "COMPANY_ADMIN",
        "company_id": 3
    }))
    .unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.email, "a@b.com");
    assert!(user.role.is_admin());
    assert_eq!(user.company_id, 3);
}

// =============================================================
// Company
// =============================================================

#[test]
fn company_update_skips_absent_fields() {
    let update = CompanyUpdate { name: Some("Acme".to_owned()), status: None };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({"name": "Acme"}));
    assert!(CompanyUpdate::default().is_empty());
    assert!(!update.is_empty());
}

#[test]
fn company_status_selectable_excludes_unknown() {
    assert!(!CompanyStatus::SELECTABLE.contains(&CompanyStatus::Unknown));
    assert_eq!(CompanyStatus::parse("SUSPENDED"), CompanyStatus::Suspended);
    assert_eq!(CompanyStatus::Inactive.label(), "Inactive");
}

// =============================================================
// Optional response fields
// =============================================================

#[test]
fn ai_insights_tolerates_missing_score_and_timestamp() {
    let insights: AiInsights = serde_json::from_value(serde_json::json!({
        "status": "success",
        "company_id": 1,
        "insights": ["one", "two"],
        "generated_by": "Mock AI Engine"
    }))
    .unwrap();
    assert_eq!(insights.insights.len(), 2);
    assert!(insights.productivity_score.is_none());
    assert!(insights.generated_at.is_none());
}

#[test]
fn dashboard_metrics_defaults_missing_counters() {
    let metrics: DashboardMetrics = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(metrics.total_users, 0);
    assert!(metrics.company_name.is_none());
}

#[test]
fn activity_log_null_details_is_none() {
    let log: ActivityLog = serde_json::from_value(serde_json::json!({
        "id": 1,
        "action": "USER_LOGIN",
        "details": null,
        "timestamp": "2024-05-01T10:00:00",
        "user_id": 2,
        "company_id": 9
    }))
    .unwrap();
    assert!(log.details.is_none());
}

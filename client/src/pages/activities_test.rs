use super::*;

fn entry(action: &str, details: Option<&str>) -> ActivityLog {
    ActivityLog {
        id: 1,
        action: action.to_owned(),
        details: details.map(str::to_owned),
        timestamp: "2024-05-01T10:05:00".to_owned(),
        user_id: 3,
    }
}

#[test]
fn action_label_replaces_every_underscore() {
    assert_eq!(action_label("USER_ROLE_UPDATED"), "USER ROLE UPDATED");
    assert_eq!(action_label("LOGIN"), "LOGIN");
}

#[test]
fn details_fall_back_when_missing_or_blank() {
    assert_eq!(details_text(&entry("LOGIN", None)), "No additional details provided.");
    assert_eq!(details_text(&entry("LOGIN", Some("  "))), "No additional details provided.");
    assert_eq!(details_text(&entry("LOGIN", Some("from 10.0.0.1"))), "from 10.0.0.1");
}

#[test]
fn load_failure_uses_backend_detail_when_present() {
    let err = portal::ApiError::Rejected { status: 500, detail: Some("db down".to_owned()) };
    assert_eq!(err.user_message(LOAD_FAILED), "db down");
    assert_eq!(portal::ApiError::Decode("x".to_owned()).user_message(LOAD_FAILED), "Failed to load activity logs.");
}

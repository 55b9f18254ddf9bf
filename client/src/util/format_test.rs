use super::*;

#[test]
fn parses_naive_iso_with_fraction() {
    let ts = parse_timestamp("2024-05-01T10:05:30.123456").unwrap();
    assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2024-05-01 10:05");
}

#[test]
fn parses_rfc3339_keeping_wall_clock() {
    let ts = parse_timestamp("2024-05-01T10:05:30+02:00").unwrap();
    assert_eq!(ts.format("%H:%M").to_string(), "10:05");
}

#[test]
fn parses_space_separated_naive() {
    assert!(parse_timestamp("2024-05-01 10:05:30").is_some());
}

#[test]
fn format_date_renders_month_day_year() {
    assert_eq!(format_date("2024-05-01T10:05:30"), "May 1, 2024");
}

#[test]
fn format_short_datetime_renders_month_day_time() {
    assert_eq!(format_short_datetime("2024-12-24T09:07:00Z"), "Dec 24, 09:07");
}

#[test]
fn format_datetime_renders_full_stamp() {
    assert_eq!(format_datetime("2024-12-24T09:07:00"), "Dec 24, 2024 09:07");
}

#[test]
fn unparseable_values_pass_through() {
    assert_eq!(format_date("yesterday"), "yesterday");
}

#[test]
fn date_or_na_handles_missing() {
    assert_eq!(date_or_na(None), "N/A");
    assert_eq!(date_or_na(Some("")), "N/A");
    assert_eq!(date_or_na(Some("2024-01-02T00:00:00")), "Jan 2, 2024");
}

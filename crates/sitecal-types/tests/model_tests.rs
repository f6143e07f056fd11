use chrono::FixedOffset;
use sitecal_types::*;

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

#[test]
fn test_collection_with_partial_records_loads() {
    // Older records may lack bounds entirely; the collection must still load.
    let raw = r#"[
        {"id": "1", "siteName": "A現場", "workPeriodStart": "2024-01-15", "workPeriodEnd": "2024-01-20", "selectedStaff": ["1"], "createdAt": "2024-01-10T09:00:00Z"},
        {"id": "2", "siteName": "B現場", "selectedStaff": ["2"]},
        {"id": "3", "siteName": "C現場", "workPeriodStart": "garbage", "workPeriodEnd": "2024-01-20", "selectedStaff": []}
    ]"#;

    let jobs: Vec<JobRecord> = serde_json::from_str(raw).unwrap();
    assert_eq!(jobs.len(), 3);
    assert!(jobs[0].work_period(utc()).is_some());
    assert!(jobs[1].work_period(utc()).is_none());
    assert!(jobs[2].work_period(utc()).is_none());
    assert_eq!(jobs[1].created_at, "");
}

#[test]
fn test_job_roundtrip_preserves_fields() {
    let job = JobRecord {
        id: JobId::new("1704067200000"),
        site_name: "A現場 配管工事".to_string(),
        work_content: "給水管の交換作業".to_string(),
        contractor_id: Some("1".to_string()),
        estimate_id: Some("1".to_string()),
        notes: None,
        work_period_start: Some("2024-01-15".to_string()),
        work_period_end: Some("2024-01-20".to_string()),
        construction_period_start: Some("2024-01-01".to_string()),
        construction_period_end: Some("2024-02-28".to_string()),
        selected_staff: vec![StaffId::from("1"), StaffId::from("2")],
        created_at: "2024-01-01T00:00:00+09:00".to_string(),
    };

    let json = serde_json::to_string(&job).unwrap();
    let back: JobRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, job);
    assert!(back.created_at_parsed().is_some());
}

#[test]
fn test_format_calendar_date() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(format_calendar_date(date), "2024-03-05");
    assert_eq!(parse_calendar_date(&format_calendar_date(date), utc()), Some(date));
}

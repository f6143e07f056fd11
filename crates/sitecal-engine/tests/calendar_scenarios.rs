use chrono::{FixedOffset, NaiveDate};
use sitecal_engine::{
    CalendarCell, CalendarMonth, JobFilter, PeriodRole, StaffFilter, calendar::day_cell,
    jobs_on_date, period_role, render_month,
};
use sitecal_types::{
    JobId, JobRecord, ReferenceData, StaffDirectory, StaffId, StaffMember, default_roster,
};

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn job(id: &str, site: &str, start: &str, end: &str, staff: &[&str]) -> JobRecord {
    JobRecord {
        id: JobId::new(id),
        site_name: site.to_string(),
        work_content: "作業".to_string(),
        contractor_id: None,
        estimate_id: None,
        notes: None,
        work_period_start: Some(start.to_string()),
        work_period_end: Some(end.to_string()),
        construction_period_start: None,
        construction_period_end: None,
        selected_staff: staff.iter().map(|s| StaffId::from(*s)).collect(),
        created_at: String::new(),
    }
}

#[test]
fn test_january_2024_scenario() {
    // Given: one job from the 15th to the 20th
    let roster = default_roster();
    let jobs = [job("1", "A現場", "2024-01-15", "2024-01-20", &["1"])];
    let refs: Vec<&JobRecord> = jobs.iter().collect();

    // When: the month is rendered
    let month = CalendarMonth::new(2024, 1).unwrap();
    let view = render_month(month, &refs, StaffDirectory::new(&roster), None, utc());

    // Then: one leading blank and the band spans 15..=20
    assert!(matches!(view.cells[0], CalendarCell::Blank));
    assert!(matches!(view.cells[1], CalendarCell::Day(_)));
    assert_eq!(view.cells.len(), 32);

    assert_eq!(view.day(15).unwrap().entries[0].role, PeriodRole::Start);
    assert_eq!(view.day(17).unwrap().entries[0].role, PeriodRole::Middle);
    assert_eq!(view.day(20).unwrap().entries[0].role, PeriodRole::End);
    assert!(view.day(21).unwrap().entries.is_empty());
    assert_eq!(view.day(14).unwrap().total, 0);
}

#[test]
fn test_tokyo_form_timestamps_render_on_entered_days() {
    // Given: 2024-01-15..20 entered at +09:00 and stored as UTC instants
    let roster = default_roster();
    let jobs = [job(
        "1",
        "A現場",
        "2024-01-14T15:00:00.000Z",
        "2024-01-19T15:00:00.000Z",
        &["1"],
    )];
    let refs: Vec<&JobRecord> = jobs.iter().collect();
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

    // When: the month is rendered in that zone
    let month = CalendarMonth::new(2024, 1).unwrap();
    let view = render_month(month, &refs, StaffDirectory::new(&roster), None, tokyo);

    // Then: the band spans the days that were entered
    assert_eq!(view.day(14).unwrap().total, 0);
    assert_eq!(view.day(15).unwrap().entries[0].role, PeriodRole::Start);
    assert_eq!(view.day(20).unwrap().entries[0].role, PeriodRole::End);
    assert_eq!(view.day(21).unwrap().total, 0);
}

#[test]
fn test_roles_over_whole_ranges() {
    let cases = [
        ("2024-02-27", "2024-03-02"),
        ("2024-12-31", "2025-01-01"),
        ("2024-06-10", "2024-06-10"),
    ];

    for (start, end) in cases {
        let j = job("r", "range", start, end, &["1"]);
        let (s, e) = j.work_period(utc()).unwrap();

        let first = period_role(s, &j, utc());
        let last = period_role(e, &j, utc());
        assert!(matches!(first, PeriodRole::Single | PeriodRole::Start));
        assert!(matches!(last, PeriodRole::Single | PeriodRole::End));
        assert_eq!(first == PeriodRole::Single, s == e);

        for d in s.iter_days().skip(1).take_while(|d| *d < e) {
            assert_eq!(
                period_role(d, &j, utc()),
                PeriodRole::Middle,
                "{} in {}..{}",
                d,
                start,
                end
            );
        }
        assert_eq!(period_role(s.pred_opt().unwrap(), &j, utc()), PeriodRole::None);
        assert_eq!(period_role(e.succ_opt().unwrap(), &j, utc()), PeriodRole::None);
    }
}

#[test]
fn test_filtering_never_adds_jobs_to_a_date() {
    let reference = ReferenceData::builtin();
    let jobs = vec![
        job("1", "North", "2024-01-10", "2024-01-18", &["1"]),
        job("2", "South", "2024-01-12", "2024-01-12", &["2"]),
        job("3", "North annex", "2024-01-05", "2024-01-31", &["1", "2"]),
    ];

    let filters = [
        JobFilter::new(),
        JobFilter::new().with_staff(StaffFilter::Only(StaffId::from("2"))),
        JobFilter::new().with_query("north"),
        JobFilter::new().with_query("nothing matches"),
    ];

    for filter in &filters {
        let kept = filter.apply(&jobs, &reference);
        for d in CalendarMonth::new(2024, 1).unwrap().days() {
            let all: Vec<&str> = jobs_on_date(d, &jobs, utc())
                .iter()
                .map(|j| j.id.as_str())
                .collect();
            let some = jobs_on_date(d, kept.iter().copied(), utc());
            assert!(some.iter().all(|j| all.contains(&j.id.as_str())));
        }
    }
}

#[test]
fn test_staff_filter_hides_unassigned_job_everywhere() {
    let reference = ReferenceData::builtin();
    let jobs = vec![job("1", "Solo", "2024-01-01", "2024-01-31", &["1"])];

    let kept = JobFilter::new()
        .with_staff(StaffFilter::Only(StaffId::from("2")))
        .apply(&jobs, &reference);

    for d in CalendarMonth::new(2024, 1).unwrap().days() {
        assert!(jobs_on_date(d, kept.iter().copied(), utc()).is_empty());
    }
}

#[test]
fn test_three_jobs_overflow_by_one() {
    let roster = default_roster();
    let jobs = [
        job("1", "One", "2024-01-15", "2024-01-15", &["1"]),
        job("2", "Two", "2024-01-14", "2024-01-16", &["2"]),
        job("3", "Three", "2024-01-15", "2024-01-19", &["3"]),
    ];
    let refs: Vec<&JobRecord> = jobs.iter().collect();

    let cell = day_cell(
        date(2024, 1, 15),
        &refs,
        StaffDirectory::new(&roster),
        None,
        utc(),
    );

    assert_eq!(cell.entries.len(), 2);
    assert_eq!(cell.overflow, 1);
    assert_eq!(cell.total, 3);
    assert_eq!(cell.entries[0].site_name, "One");
    assert_eq!(cell.entries[1].site_name, "Two");
}

#[test]
fn test_day_cell_snapshot() {
    let roster = vec![
        StaffMember::new("1", "田中太郎", "bg-blue-500"),
        StaffMember::new("2", "佐藤花子", "#123456"),
    ];
    let jobs = [job("100", "A現場", "2024-01-15", "2024-01-16", &["1", "2", "9"])];
    let refs: Vec<&JobRecord> = jobs.iter().collect();

    let cell = day_cell(
        date(2024, 1, 15),
        &refs,
        StaffDirectory::new(&roster),
        Some(date(2024, 1, 15)),
        utc(),
    );

    let json = serde_json::to_string_pretty(&cell).unwrap();
    insta::assert_snapshot!("day_cell_start", json);
}

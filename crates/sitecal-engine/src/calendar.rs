use chrono::{Datelike, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use sitecal_types::{JobId, JobRecord, StaffDirectory, resolve_color};

use crate::Result;

/// Jobs shown directly in one day cell; the rest collapse into "+N".
pub const CELL_CAPACITY: usize = 2;

/// Continuation text for the middle and last day of a multi-day band
pub const CONTINUATION_MARK: &str = "━━━";

/// A displayed month (month is 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(sitecal_types::Error::InvalidMonth { year, month }.into());
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Validated in the constructors
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Same month in another year
    pub fn with_year(&self, year: i32) -> Result<Self> {
        Self::new(year, self.month)
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month;
        self.first_day()
            .iter_days()
            .take_while(move |d| d.month() == month)
    }

    /// Sunday-first grid: leading blanks, then every day of the month.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let blanks = self.first_day().weekday().num_days_from_sunday() as usize;
        let mut slots: Vec<Option<NaiveDate>> = vec![None; blanks];
        slots.extend(self.days().map(Some));
        slots
    }
}

/// Years offered by the year picker around `current`
pub fn year_options(current: i32) -> Vec<i32> {
    (current - 5..current + 5).collect()
}

/// Build the slots of a month view. Blank leading slots carry no date.
pub fn build_month_grid(year: i32, month: u32) -> Result<Vec<Option<NaiveDate>>> {
    Ok(CalendarMonth::new(year, month)?.grid())
}

/// Position of a date within a job's work period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodRole {
    Single,
    Start,
    Middle,
    End,
    None,
}

impl PeriodRole {
    /// Whether the cell carries the site name rather than a continuation mark
    pub fn shows_title(self) -> bool {
        matches!(self, PeriodRole::Single | PeriodRole::Start)
    }

    pub fn rounded_left(self) -> bool {
        !matches!(self, PeriodRole::Middle | PeriodRole::End)
    }

    pub fn rounded_right(self) -> bool {
        !matches!(self, PeriodRole::Middle | PeriodRole::Start)
    }
}

/// Work period of a job as an ordered pair of calendar dates in `zone`.
///
/// Missing bounds, unparseable bounds and inverted periods all yield `None`:
/// such a job is simply not drawn.
fn active_period(job: &JobRecord, zone: FixedOffset) -> Option<(NaiveDate, NaiveDate)> {
    let Some((start, end)) = job.work_period(zone) else {
        if job.work_period_start.is_some() && job.work_period_end.is_some() {
            tracing::debug!(job_id = %job.id, "skipping job with unparseable work period");
        }
        return None;
    };

    if start > end {
        tracing::debug!(job_id = %job.id, %start, %end, "skipping job with inverted work period");
        return None;
    }

    Some((start, end))
}

pub fn is_on_date(date: NaiveDate, job: &JobRecord, zone: FixedOffset) -> bool {
    active_period(job, zone).is_some_and(|(start, end)| start <= date && date <= end)
}

/// Jobs whose work period covers `date`, in input order.
pub fn jobs_on_date<'a, I>(date: NaiveDate, jobs: I, zone: FixedOffset) -> Vec<&'a JobRecord>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    jobs.into_iter().filter(|job| is_on_date(date, job, zone)).collect()
}

pub fn period_role(date: NaiveDate, job: &JobRecord, zone: FixedOffset) -> PeriodRole {
    let Some((start, end)) = active_period(job, zone) else {
        return PeriodRole::None;
    };

    if date == start && date == end {
        PeriodRole::Single
    } else if date == start {
        PeriodRole::Start
    } else if date == end {
        PeriodRole::End
    } else if start < date && date < end {
        PeriodRole::Middle
    } else {
        PeriodRole::None
    }
}

/// Split a day's jobs into the entries drawn in the cell and the overflow count.
pub fn cell_capacity<T>(jobs: &[T]) -> (&[T], usize) {
    let shown = jobs.len().min(CELL_CAPACITY);
    (&jobs[..shown], jobs.len() - shown)
}

/// One colored bar segment for a (date, job, staff) triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffBand {
    pub staff_id: String,
    pub staff_name: String,
    pub color: String,
    pub label: String,
    pub rounded_left: bool,
    pub rounded_right: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellEntry {
    pub job_id: JobId,
    pub site_name: String,
    pub role: PeriodRole,
    pub bands: Vec<StaffBand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub entries: Vec<CellEntry>,
    pub overflow: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarCell {
    Blank,
    Day(DayCell),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthView {
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.cells.iter().find_map(|cell| match cell {
            CalendarCell::Day(d) if d.date.day() == day => Some(d),
            _ => None,
        })
    }
}

fn band_label(job: &JobRecord, role: PeriodRole, staff_name: &str) -> String {
    if role.shows_title() {
        // The assignment count includes dangling ids, matching what was saved.
        if job.selected_staff.len() > 1 {
            format!("{} ({})", job.site_name, staff_name)
        } else {
            job.site_name.clone()
        }
    } else if role == PeriodRole::None {
        String::new()
    } else {
        CONTINUATION_MARK.to_string()
    }
}

pub fn cell_entry(
    date: NaiveDate,
    job: &JobRecord,
    staff: StaffDirectory<'_>,
    zone: FixedOffset,
) -> CellEntry {
    let role = period_role(date, job, zone);
    let bands = staff
        .resolve(&job.selected_staff)
        .map(|member| StaffBand {
            staff_id: member.id.to_string(),
            staff_name: member.name.clone(),
            color: resolve_color(&member.color).to_hex(),
            label: band_label(job, role, &member.name),
            rounded_left: role.rounded_left(),
            rounded_right: role.rounded_right(),
        })
        .collect();

    CellEntry {
        job_id: job.id.clone(),
        site_name: job.site_name.clone(),
        role,
        bands,
    }
}

pub fn day_cell(
    date: NaiveDate,
    jobs: &[&JobRecord],
    staff: StaffDirectory<'_>,
    today: Option<NaiveDate>,
    zone: FixedOffset,
) -> DayCell {
    let on_date = jobs_on_date(date, jobs.iter().copied(), zone);
    let (shown, overflow) = cell_capacity(&on_date);

    DayCell {
        date,
        is_today: today == Some(date),
        entries: shown
            .iter()
            .map(|job| cell_entry(date, job, staff, zone))
            .collect(),
        overflow,
        total: on_date.len(),
    }
}

/// Render every slot of `month` for an already-filtered job list, reading
/// timestamped bounds in `zone`.
pub fn render_month(
    month: CalendarMonth,
    jobs: &[&JobRecord],
    staff: StaffDirectory<'_>,
    today: Option<NaiveDate>,
    zone: FixedOffset,
) -> MonthView {
    let cells = month
        .grid()
        .into_iter()
        .map(|slot| match slot {
            None => CalendarCell::Blank,
            Some(date) => CalendarCell::Day(day_cell(date, jobs, staff, today, zone)),
        })
        .collect();

    MonthView {
        year: month.year(),
        month: month.month(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecal_types::{StaffId, StaffMember};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn job(id: &str, start: &str, end: &str, staff: &[&str]) -> JobRecord {
        JobRecord {
            id: JobId::new(id),
            site_name: format!("site-{}", id),
            work_content: String::new(),
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
    fn test_grid_january_2024_starts_monday() {
        let grid = build_month_grid(2024, 1).unwrap();
        assert_eq!(grid.len(), 32);
        assert_eq!(grid[0], None);
        assert_eq!(grid[1], Some(date(2024, 1, 1)));
        assert_eq!(grid[31], Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_grid_sunday_first_has_no_blanks() {
        // 2023-10-01 was a Sunday
        let grid = build_month_grid(2023, 10).unwrap();
        assert_eq!(grid[0], Some(date(2023, 10, 1)));
        assert_eq!(grid.len(), 31);
    }

    #[test]
    fn test_grid_max_padding() {
        // 2022-10-01 was a Saturday: 6 blanks + 31 days
        let grid = build_month_grid(2022, 10).unwrap();
        assert_eq!(grid.iter().filter(|s| s.is_none()).count(), 6);
        assert_eq!(grid.len(), 37);
        assert!(grid.len() <= 42);
    }

    #[test]
    fn test_grid_leap_february() {
        let grid = build_month_grid(2024, 2).unwrap();
        assert_eq!(grid.iter().flatten().count(), 29);
        let grid = build_month_grid(2023, 2).unwrap();
        assert_eq!(grid.iter().flatten().count(), 28);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(build_month_grid(2024, 0).is_err());
        assert!(build_month_grid(2024, 13).is_err());
    }

    #[test]
    fn test_month_navigation_wraps() {
        let dec = CalendarMonth::new(2023, 12).unwrap();
        assert_eq!(dec.next(), CalendarMonth::new(2024, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(year_options(2024).first(), Some(&2019));
        assert_eq!(year_options(2024).last(), Some(&2028));
        assert_eq!(year_options(2024).len(), 10);
    }

    #[test]
    fn test_period_roles_for_multi_day_job() {
        let j = job("1", "2024-01-15", "2024-01-20", &["1"]);
        assert_eq!(period_role(date(2024, 1, 14), &j, utc()), PeriodRole::None);
        assert_eq!(period_role(date(2024, 1, 15), &j, utc()), PeriodRole::Start);
        assert_eq!(period_role(date(2024, 1, 17), &j, utc()), PeriodRole::Middle);
        assert_eq!(period_role(date(2024, 1, 20), &j, utc()), PeriodRole::End);
        assert_eq!(period_role(date(2024, 1, 21), &j, utc()), PeriodRole::None);
    }

    #[test]
    fn test_single_day_job() {
        let j = job("1", "2024-01-15T09:30:00+09:00", "2024-01-15", &["1"]);
        assert_eq!(period_role(date(2024, 1, 15), &j, utc()), PeriodRole::Single);
        assert_eq!(jobs_on_date(date(2024, 1, 15), [&j], utc()).len(), 1);
    }

    #[test]
    fn test_form_timestamps_land_on_local_days() {
        // 2024-01-15..20 entered in Tokyo, persisted as UTC instants
        let j = job(
            "1",
            "2024-01-14T15:00:00.000Z",
            "2024-01-19T15:00:00.000Z",
            &["1"],
        );
        assert_eq!(period_role(date(2024, 1, 14), &j, jst()), PeriodRole::None);
        assert_eq!(period_role(date(2024, 1, 15), &j, jst()), PeriodRole::Start);
        assert_eq!(period_role(date(2024, 1, 17), &j, jst()), PeriodRole::Middle);
        assert_eq!(period_role(date(2024, 1, 20), &j, jst()), PeriodRole::End);
        assert_eq!(jobs_on_date(date(2024, 1, 20), [&j], jst()).len(), 1);
        assert!(jobs_on_date(date(2024, 1, 21), [&j], jst()).is_empty());

        assert_eq!(period_role(date(2024, 1, 14), &j, utc()), PeriodRole::Start);
    }

    #[test]
    fn test_unparseable_or_inverted_jobs_never_render() {
        let bad = job("1", "2024-01-15", "soon", &["1"]);
        let inverted = job("2", "2024-01-20", "2024-01-15", &["1"]);
        for day in 10..25 {
            let d = date(2024, 1, day);
            assert_eq!(period_role(d, &bad, utc()), PeriodRole::None);
            assert_eq!(period_role(d, &inverted, utc()), PeriodRole::None);
        }
        assert!(jobs_on_date(date(2024, 1, 15), [&bad, &inverted], utc()).is_empty());
    }

    #[test]
    fn test_cell_capacity_reports_overflow() {
        let jobs = [1, 2, 3];
        let (shown, overflow) = cell_capacity(&jobs);
        assert_eq!(shown, &[1, 2]);
        assert_eq!(overflow, 1);

        let (shown, overflow) = cell_capacity(&jobs[..1]);
        assert_eq!(shown.len(), 1);
        assert_eq!(overflow, 0);
    }

    #[test]
    fn test_corner_flags() {
        assert!(PeriodRole::Start.rounded_left() && !PeriodRole::Start.rounded_right());
        assert!(!PeriodRole::End.rounded_left() && PeriodRole::End.rounded_right());
        assert!(!PeriodRole::Middle.rounded_left() && !PeriodRole::Middle.rounded_right());
        assert!(PeriodRole::Single.rounded_left() && PeriodRole::Single.rounded_right());
    }

    #[test]
    fn test_band_labels_and_dangling_staff() {
        let roster = vec![
            StaffMember::new("1", "田中太郎", "bg-blue-500"),
            StaffMember::new("2", "佐藤花子", "bg-green-500"),
        ];
        let staff = StaffDirectory::new(&roster);
        let j = job("7", "2024-01-15", "2024-01-16", &["1", "gone", "2"]);

        let start = cell_entry(date(2024, 1, 15), &j, staff, utc());
        assert_eq!(start.role, PeriodRole::Start);
        assert_eq!(start.bands.len(), 2);
        assert_eq!(start.bands[0].label, "site-7 (田中太郎)");
        assert_eq!(start.bands[1].label, "site-7 (佐藤花子)");
        assert_eq!(start.bands[1].color, "#22c55e");

        let end = cell_entry(date(2024, 1, 16), &j, staff, utc());
        assert_eq!(end.bands[0].label, CONTINUATION_MARK);
        assert!(!end.bands[0].rounded_left);
    }

    #[test]
    fn test_single_assignee_label_is_site_name_only() {
        let roster = vec![StaffMember::new("1", "田中太郎", "bg-blue-500")];
        let j = job("7", "2024-01-15", "2024-01-15", &["1"]);
        let entry = cell_entry(date(2024, 1, 15), &j, StaffDirectory::new(&roster), utc());
        assert_eq!(entry.bands[0].label, "site-7");
    }

    #[test]
    fn test_render_month_marks_today_and_overflow() {
        let roster = vec![StaffMember::new("1", "田中太郎", "bg-blue-500")];
        let jobs = [
            job("a", "2024-01-10", "2024-01-12", &["1"]),
            job("b", "2024-01-11", "2024-01-11", &["1"]),
            job("c", "2024-01-01", "2024-01-31", &["1"]),
        ];
        let refs: Vec<&JobRecord> = jobs.iter().collect();
        let month = CalendarMonth::new(2024, 1).unwrap();

        let view = render_month(
            month,
            &refs,
            StaffDirectory::new(&roster),
            Some(date(2024, 1, 11)),
            utc(),
        );
        assert_eq!(view.cells.len(), 32);
        assert_eq!(view.cells[0], CalendarCell::Blank);

        let eleventh = view.day(11).unwrap();
        assert!(eleventh.is_today);
        assert_eq!(eleventh.total, 3);
        assert_eq!(eleventh.entries.len(), 2);
        assert_eq!(eleventh.overflow, 1);
        assert_eq!(eleventh.entries[0].job_id.as_str(), "a");
        assert_eq!(eleventh.entries[1].job_id.as_str(), "b");

        let second = view.day(2).unwrap();
        assert!(!second.is_today);
        assert_eq!(second.entries[0].role, PeriodRole::Middle);
    }
}

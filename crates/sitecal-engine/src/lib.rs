// Engine module - Pure scheduling logic (calendar ranges, filters, export formatting)
// This layer sits between persisted records (types) and CLI presentation

pub mod calendar;
pub mod detail;
pub mod error;
pub mod export;
pub mod filter;

pub use calendar::{
    CalendarCell, CalendarMonth, CellEntry, DayCell, MonthView, PeriodRole, StaffBand,
    build_month_grid, cell_capacity, jobs_on_date, period_role, render_month, year_options,
};
pub use detail::{DayDetail, DayDetailEntry, day_detail};
pub use error::{Error, Result};
pub use export::{
    ExportArtifact, ExportDataset, ExportOptions, ExportRecord, ExportStyle, export_dataset,
};
pub use filter::{JobFilter, StaffFilter, WorkDateRange};

use chrono::{FixedOffset, Offset, Utc};
use sitecal_types::{JobRecord, ReferenceData, StaffDirectory, StaffMember};

// Façade API - Stable public interface for the runtime layer

/// Export rows for `jobs` as one artifact, optionally in FileMaker layout.
/// Stored timestamps are read in `options.zone`.
pub fn export_jobs(
    jobs: &[&JobRecord],
    staff: StaffDirectory<'_>,
    reference: &ReferenceData,
    include_notes: bool,
    options: &ExportOptions,
) -> Result<ExportArtifact> {
    let rows = export::job_rows(jobs, staff, reference, include_notes, options.zone);
    export_dataset(ExportDataset::Jobs, &rows, options)
}

/// Export the roster as one artifact; FileMaker layout does not apply
pub fn export_staff(members: &[StaffMember], options: &ExportOptions) -> Result<ExportArtifact> {
    let rows = export::staff_rows(members)?;
    export_dataset(ExportDataset::Staff, &rows, options)
}

/// Offset from whole minutes east of UTC, clamped into chrono's valid range
pub fn utc_offset(minutes: i32) -> FixedOffset {
    let seconds = minutes.clamp(-(23 * 60 + 59), 23 * 60 + 59) * 60;
    FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
}

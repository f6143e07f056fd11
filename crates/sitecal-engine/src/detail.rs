use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;
use sitecal_types::{JobId, JobRecord, ReferenceData, StaffDirectory, resolve_color};

use crate::calendar::{PeriodRole, jobs_on_date, period_role};

/// Shown in place of staff names when none of the assigned ids resolve
pub const UNASSIGNED_LABEL: &str = "未設定";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffChip {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDetailEntry {
    pub job_id: JobId,
    pub site_name: String,
    pub role: PeriodRole,
    pub staff: Vec<StaffChip>,
    pub staff_names: String,
    pub contractor: String,
    pub estimate_number: String,
    pub work_content: String,
}

/// Everything scheduled on one date, without the per-cell capacity limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub entries: Vec<DayDetailEntry>,
}

pub fn day_detail(
    date: NaiveDate,
    jobs: &[&JobRecord],
    staff: StaffDirectory<'_>,
    reference: &ReferenceData,
    zone: FixedOffset,
) -> DayDetail {
    let entries = jobs_on_date(date, jobs.iter().copied(), zone)
        .into_iter()
        .map(|job| {
            let chips: Vec<StaffChip> = staff
                .resolve(&job.selected_staff)
                .map(|m| StaffChip {
                    id: m.id.to_string(),
                    name: m.name.clone(),
                    color: resolve_color(&m.color).to_hex(),
                })
                .collect();

            let staff_names = if chips.is_empty() {
                UNASSIGNED_LABEL.to_string()
            } else {
                chips
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            DayDetailEntry {
                job_id: job.id.clone(),
                site_name: job.site_name.clone(),
                role: period_role(date, job, zone),
                staff: chips,
                staff_names,
                contractor: reference.contractor_name(job.contractor_ref()).to_string(),
                estimate_number: reference.estimate_number(job.estimate_ref()).to_string(),
                work_content: job.work_content.clone(),
            }
        })
        .collect();

    DayDetail { date, entries }
}

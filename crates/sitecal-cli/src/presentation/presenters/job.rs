use chrono::FixedOffset;
use sitecal_engine::JobFilter;
use sitecal_runtime::NewJob;
use sitecal_types::{
    FormDraft, JobRecord, ReferenceData, StaffDirectory, StaffId, format_calendar_date,
    resolve_color,
};
use std::path::Path;

use super::calendar::filter_summary;
use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, DraftViewModel, Guidance, JobDetailViewModel, JobEntryViewModel,
    JobListViewModel, MessageViewModel, StaffRef, StatusBadge,
};

fn staff_refs(ids: &[StaffId], staff: StaffDirectory<'_>) -> Vec<StaffRef> {
    ids.iter()
        .map(|id| {
            let member = staff.get(id);
            StaffRef {
                id: id.to_string(),
                name: member.map(|m| m.name.clone()),
                color: member.map(|m| resolve_color(&m.color).to_hex()),
            }
        })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn job_entry(
    job: &JobRecord,
    staff: StaffDirectory<'_>,
    reference: &ReferenceData,
    zone: FixedOffset,
) -> JobEntryViewModel {
    let (construction_start, construction_end) = match job.construction_period(zone) {
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    };

    JobEntryViewModel {
        id: job.id.to_string(),
        site_name: job.site_name.clone(),
        work_content: job.work_content.clone(),
        work_period_start: job.work_start(zone),
        work_period_end: job.work_end(zone),
        construction_period_start: construction_start,
        construction_period_end: construction_end,
        staff: staff_refs(&job.selected_staff, staff),
        contractor: non_empty(reference.contractor_name(job.contractor_ref())),
        estimate_number: non_empty(reference.estimate_number(job.estimate_ref())),
        notes: job.notes.as_deref().and_then(non_empty),
        created_at: job.created_at.clone(),
    }
}

pub fn present_job_list(
    jobs: Vec<JobEntryViewModel>,
    total: usize,
    filter: &JobFilter,
) -> CommandResultViewModel<JobListViewModel> {
    let shown = jobs.len();
    let content = JobListViewModel {
        total,
        filter: filter_summary(filter),
        jobs,
    };

    let mut result = CommandResultViewModel::new(content);

    if total == 0 {
        result = result.with_suggestion(Guidance::new("Register a job").with_command(cmd::JOB_ADD));
    } else if shown < total {
        result = result.with_badge(StatusBadge::info(format!(
            "{} of {} jobs match",
            shown, total
        )));
    } else {
        result = result
            .with_suggestion(Guidance::new("Export the list").with_command(cmd::EXPORT_JOBS));
    }

    result
}

pub fn present_job_detail(entry: JobEntryViewModel) -> CommandResultViewModel<JobDetailViewModel> {
    let mut result = CommandResultViewModel::new(JobDetailViewModel { job: entry });
    if let Some(start) = result.content.job.work_period_start {
        result = result.with_suggestion(
            Guidance::new("See the first work day")
                .with_command(fmt::day(&format_calendar_date(start))),
        );
    }
    result
}

pub fn present_job_registered(
    entry: JobEntryViewModel,
) -> CommandResultViewModel<JobDetailViewModel> {
    let badge = StatusBadge::success(format!("Registered {}", entry.site_name));
    let show = fmt::job_show(&entry.id);
    present_job_detail(entry)
        .with_badge(badge)
        .with_suggestion(Guidance::new("Show it again later").with_command(show))
}

pub fn present_draft(
    draft: FormDraft,
    staff: StaffDirectory<'_>,
    zone: FixedOffset,
    saved: bool,
) -> CommandResultViewModel<DraftViewModel> {
    let missing = match NewJob::from_draft(&draft, zone).validate() {
        Ok(_) => Vec::new(),
        Err(e) => vec![e.to_string()],
    };
    let ready = missing.is_empty() && !draft.is_empty();

    let content = DraftViewModel {
        staff: staff_refs(&draft.selected_staff, staff),
        draft,
        missing,
    };

    let mut result = CommandResultViewModel::new(content);
    if saved {
        result = result.with_badge(StatusBadge::success("Draft saved"));
    }
    if ready {
        result = result.with_suggestion(
            Guidance::new("Register the draft").with_command(cmd::JOB_ADD_FROM_DRAFT),
        );
    }

    result
}

pub fn present_draft_cleared() -> CommandResultViewModel<MessageViewModel> {
    CommandResultViewModel::new(MessageViewModel {
        message: "The registration form is empty again.".to_string(),
    })
    .with_badge(StatusBadge::success("Draft cleared"))
}

/// Shown when `sitecal` runs without a subcommand
pub fn present_guidance(
    job_count: usize,
    data_dir: Option<&Path>,
) -> CommandResultViewModel<MessageViewModel> {
    let mut message = if job_count == 0 {
        "No jobs registered yet.".to_string()
    } else {
        format!("{} job(s) registered.", job_count)
    };
    if let Some(dir) = data_dir {
        message.push_str(&format!("\nData directory: {}", dir.display()));
    }

    let mut result = CommandResultViewModel::new(MessageViewModel { message });
    if job_count == 0 {
        result = result
            .with_suggestion(Guidance::new("Check the roster").with_command(cmd::STAFF_LIST))
            .with_suggestion(Guidance::new("Register a job").with_command(cmd::JOB_ADD))
            .with_suggestion(
                Guidance::new("Or build it up step by step").with_command(cmd::DRAFT_SHOW),
            );
    } else {
        result = result
            .with_suggestion(Guidance::new("Open this month").with_command(cmd::CALENDAR))
            .with_suggestion(Guidance::new("List every job").with_command(cmd::JOB_LIST));
    }
    result
}

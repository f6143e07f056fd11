use crate::storage::{self, DRAFT_KEY, KeyValueStore, PROJECTS_KEY};
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use sitecal_types::{FormDraft, JobId, JobRecord, StaffId, format_calendar_date, next_time_id};
use std::sync::Arc;

pub const MISSING_PERIOD: &str = "作業期間を選択してください";
pub const MISSING_STAFF: &str = "担当者を選択してください";
pub const INVERTED_PERIOD: &str = "作業期間の終了日は開始日以降を選択してください";
pub const INVERTED_CONSTRUCTION_PERIOD: &str = "工期の終了日は開始日以降を選択してください";

/// Registration input; text fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewJob {
    pub site_name: String,
    pub work_content: String,
    pub contractor_id: Option<String>,
    pub estimate_id: Option<String>,
    pub notes: Option<String>,
    pub work_period_start: Option<NaiveDate>,
    pub work_period_end: Option<NaiveDate>,
    pub construction_period_start: Option<NaiveDate>,
    pub construction_period_end: Option<NaiveDate>,
    pub selected_staff: Vec<StaffId>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn draft_date(raw: Option<&str>, zone: FixedOffset) -> Option<NaiveDate> {
    raw.and_then(|raw| sitecal_types::parse_calendar_date(raw, zone))
}

impl NewJob {
    /// Read a saved draft; timestamped dates are taken in `zone`.
    pub fn from_draft(draft: &FormDraft, zone: FixedOffset) -> Self {
        let form = &draft.form_data;
        Self {
            site_name: form.site_name.clone(),
            work_content: form.work_content.clone(),
            contractor_id: non_empty(Some(form.contractor_id.clone())),
            estimate_id: non_empty(Some(form.estimate_id.clone())),
            notes: non_empty(Some(form.notes.clone())),
            work_period_start: draft_date(draft.work_period_start.as_deref(), zone),
            work_period_end: draft_date(draft.work_period_end.as_deref(), zone),
            construction_period_start: draft_date(draft.construction_period_start.as_deref(), zone),
            construction_period_end: draft_date(draft.construction_period_end.as_deref(), zone),
            selected_staff: draft.selected_staff.clone(),
        }
    }

    /// Check required fields; returns the validated work period.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate)> {
        let (Some(start), Some(end)) = (self.work_period_start, self.work_period_end) else {
            return Err(Error::Validation(MISSING_PERIOD.to_string()));
        };

        if self.selected_staff.is_empty() {
            return Err(Error::Validation(MISSING_STAFF.to_string()));
        }

        if start > end {
            return Err(Error::Validation(INVERTED_PERIOD.to_string()));
        }

        if let (Some(cs), Some(ce)) = (self.construction_period_start, self.construction_period_end)
            && cs > ce
        {
            return Err(Error::Validation(INVERTED_CONSTRUCTION_PERIOD.to_string()));
        }

        Ok((start, end))
    }
}

pub struct JobOps {
    store: Arc<dyn KeyValueStore>,
    zone: FixedOffset,
}

impl JobOps {
    pub fn new(store: Arc<dyn KeyValueStore>, zone: FixedOffset) -> Self {
        Self { store, zone }
    }

    pub fn list(&self) -> Result<Vec<JobRecord>> {
        Ok(storage::load_collection(self.store.as_ref(), PROJECTS_KEY)?.unwrap_or_default())
    }

    pub fn get(&self, id: &str) -> Result<JobRecord> {
        self.list()?
            .into_iter()
            .find(|job| job.id.as_str() == id)
            .ok_or_else(|| Error::NotFound(format!("job {}", id)))
    }

    pub fn register(&self, new_job: NewJob) -> Result<JobRecord> {
        self.register_at(new_job, Utc::now())
    }

    /// Validate, append and clear the saved draft; nothing is written on rejection.
    pub fn register_at(&self, new_job: NewJob, now: DateTime<Utc>) -> Result<JobRecord> {
        let (start, end) = new_job.validate()?;

        let mut jobs = self.list()?;
        let id = next_time_id(now.timestamp_millis(), |candidate| {
            jobs.iter().any(|job| job.id.as_str() == candidate)
        });

        let record = JobRecord {
            id: JobId::new(id),
            site_name: new_job.site_name,
            work_content: new_job.work_content,
            contractor_id: non_empty(new_job.contractor_id),
            estimate_id: non_empty(new_job.estimate_id),
            notes: non_empty(new_job.notes),
            work_period_start: Some(format_calendar_date(start)),
            work_period_end: Some(format_calendar_date(end)),
            construction_period_start: new_job.construction_period_start.map(format_calendar_date),
            construction_period_end: new_job.construction_period_end.map(format_calendar_date),
            selected_staff: new_job.selected_staff,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        jobs.push(record.clone());
        storage::save(self.store.as_ref(), PROJECTS_KEY, &jobs)?;
        self.store.remove(DRAFT_KEY)?;

        tracing::info!(job_id = %record.id, site = %record.site_name, "job registered");
        Ok(record)
    }

    /// Register whatever the saved draft holds.
    pub fn register_from_draft(&self) -> Result<JobRecord> {
        let draft: FormDraft = storage::load(self.store.as_ref(), DRAFT_KEY)?.unwrap_or_default();
        self.register(NewJob::from_draft(&draft, self.zone))
    }
}

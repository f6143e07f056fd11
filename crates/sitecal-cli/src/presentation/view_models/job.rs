use chrono::NaiveDate;
use serde::Serialize;
use sitecal_types::FormDraft;
use std::fmt;

use super::{CreateView, RenderOptions};

/// A staff id as stored on a job, with its name when it still resolves
#[derive(Debug, Clone, Serialize)]
pub struct StaffRef {
    pub id: String,
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobEntryViewModel {
    pub id: String,
    pub site_name: String,
    pub work_content: String,
    pub work_period_start: Option<NaiveDate>,
    pub work_period_end: Option<NaiveDate>,
    pub construction_period_start: Option<NaiveDate>,
    pub construction_period_end: Option<NaiveDate>,
    pub staff: Vec<StaffRef>,
    pub contractor: Option<String>,
    pub estimate_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct JobListViewModel {
    pub total: usize,
    pub filter: super::FilterSummary,
    pub jobs: Vec<JobEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct JobDetailViewModel {
    pub job: JobEntryViewModel,
}

#[derive(Debug, Serialize)]
pub struct DraftViewModel {
    pub draft: FormDraft,
    pub staff: Vec<StaffRef>,
    /// Validation messages that would block registration right now
    pub missing: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageViewModel {
    pub message: String,
}

impl CreateView for JobListViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::job::JobListView;
        Box::new(JobListView::new(self))
    }
}

impl CreateView for JobDetailViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::job::JobDetailView;
        Box::new(JobDetailView::new(&self.job, options))
    }
}

impl CreateView for DraftViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::job::DraftView;
        Box::new(DraftView::new(self))
    }
}

impl CreateView for MessageViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(format!("{}\n", self.message))
    }
}

use chrono::{FixedOffset, NaiveDate};
use sitecal_types::{JobRecord, ReferenceData, StaffId};
use std::fmt;
use std::str::FromStr;

/// Which staff member's jobs to keep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StaffFilter {
    #[default]
    All,
    Only(StaffId),
}

impl StaffFilter {
    pub fn matches(&self, job: &JobRecord) -> bool {
        match self {
            StaffFilter::All => true,
            StaffFilter::Only(id) => job.is_assigned_to(id),
        }
    }
}

impl FromStr for StaffFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("Empty staff filter".to_string()),
            "all" => Ok(StaffFilter::All),
            id => Ok(StaffFilter::Only(StaffId::from(id))),
        }
    }
}

impl fmt::Display for StaffFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffFilter::All => write!(f, "all"),
            StaffFilter::Only(id) => write!(f, "{}", id),
        }
    }
}

/// Case-insensitive substring match over site name, work content,
/// contractor display name and estimate display code.
pub fn matches_text(job: &JobRecord, query: &str, reference: &ReferenceData) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    [
        job.site_name.as_str(),
        job.work_content.as_str(),
        reference.contractor_name(job.contractor_ref()),
        reference.estimate_number(job.estimate_ref()),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Inclusive bounds on a job's work date, read in `zone`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub zone: FixedOffset,
}

impl WorkDateRange {
    pub fn contains(&self, job: &JobRecord) -> bool {
        let Some(work_date) = job.work_start(self.zone) else {
            return false;
        };

        self.from.is_none_or(|from| work_date >= from)
            && self.to.is_none_or(|to| work_date <= to)
    }
}

/// Composable job predicates; all set predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub staff: StaffFilter,
    pub query: String,
    pub work_dates: Option<WorkDateRange>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_staff(mut self, staff: StaffFilter) -> Self {
        self.staff = staff;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Bound the work date (the first day of the work period), inclusive.
    /// Without either bound every job passes.
    pub fn with_work_date_range(
        mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        zone: FixedOffset,
    ) -> Self {
        self.work_dates =
            (from.is_some() || to.is_some()).then_some(WorkDateRange { from, to, zone });
        self
    }

    pub fn matches(&self, job: &JobRecord, reference: &ReferenceData) -> bool {
        self.staff.matches(job)
            && matches_text(job, &self.query, reference)
            && self.work_dates.is_none_or(|range| range.contains(job))
    }

    /// A new view over `jobs` in their original order; the input is untouched.
    pub fn apply<'a>(
        &self,
        jobs: &'a [JobRecord],
        reference: &ReferenceData,
    ) -> Vec<&'a JobRecord> {
        jobs.iter()
            .filter(|job| self.matches(job, reference))
            .collect()
    }
}

use crate::Result;
use crate::services::{JobOps, StaffOps};
use chrono::{FixedOffset, NaiveDate};
use sitecal_engine::{CalendarMonth, DayDetail, JobFilter, MonthView, day_detail, render_month};
use sitecal_types::{ReferenceData, StaffDirectory};
use std::sync::Arc;

/// Loads the collections and hands them to the calendar engine.
pub struct CalendarOps {
    jobs: JobOps,
    staff: StaffOps,
    reference: Arc<ReferenceData>,
    zone: FixedOffset,
}

impl CalendarOps {
    pub fn new(
        jobs: JobOps,
        staff: StaffOps,
        reference: Arc<ReferenceData>,
        zone: FixedOffset,
    ) -> Self {
        Self {
            jobs,
            staff,
            reference,
            zone,
        }
    }

    pub fn month(
        &self,
        month: CalendarMonth,
        filter: &JobFilter,
        today: Option<NaiveDate>,
    ) -> Result<MonthView> {
        let jobs = self.jobs.list()?;
        let roster = self.staff.list()?;
        let visible = filter.apply(&jobs, &self.reference);

        tracing::debug!(
            year = month.year(),
            month = month.month(),
            total = jobs.len(),
            visible = visible.len(),
            "rendering month"
        );
        Ok(render_month(
            month,
            &visible,
            StaffDirectory::new(&roster),
            today,
            self.zone,
        ))
    }

    pub fn day(&self, date: NaiveDate, filter: &JobFilter) -> Result<DayDetail> {
        let jobs = self.jobs.list()?;
        let roster = self.staff.list()?;
        let visible = filter.apply(&jobs, &self.reference);

        Ok(day_detail(
            date,
            &visible,
            StaffDirectory::new(&roster),
            &self.reference,
            self.zone,
        ))
    }
}

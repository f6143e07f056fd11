use chrono::NaiveDate;
use std::fmt;

use super::paint;
use crate::presentation::formatters::{fit, pad};
use crate::presentation::view_models::{
    DraftViewModel, JobEntryViewModel, JobListViewModel, RenderOptions, StaffRef,
};

fn period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    let show = |d: Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string());
    match (show(start), show(end)) {
        (None, None) => "-".to_string(),
        (s, e) => format!("{} 〜 {}", s.unwrap_or_default(), e.unwrap_or_default()),
    }
}

fn staff_names(staff: &[StaffRef]) -> String {
    if staff.is_empty() {
        return "-".to_string();
    }
    staff
        .iter()
        .map(|s| match &s.name {
            Some(name) => name.clone(),
            None => format!("#{}?", s.id),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn staff_chips(staff: &[StaffRef], options: RenderOptions) -> String {
    if !options.color {
        return staff_names(staff);
    }
    staff
        .iter()
        .map(|s| match (&s.name, &s.color) {
            (Some(name), Some(color)) => paint(&format!(" {} ", name), color, true),
            _ => format!("#{}?", s.id),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// --------------------------------------------------------
// Job List View
// --------------------------------------------------------

pub struct JobListView<'a> {
    data: &'a JobListViewModel,
}

impl<'a> JobListView<'a> {
    pub fn new(data: &'a JobListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for JobListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.jobs.is_empty() {
            writeln!(f, "No jobs found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{} {} {} {} CONTRACTOR",
            pad("ID", 14),
            pad("SITE", 24),
            pad("WORK PERIOD", 25),
            pad("STAFF", 24),
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for job in &self.data.jobs {
            writeln!(
                f,
                "{} {} {} {} {}",
                fit(&job.id, 14),
                fit(&job.site_name, 24),
                pad(&period(job.work_period_start, job.work_period_end), 25),
                fit(&staff_names(&job.staff), 24),
                job.contractor.as_deref().unwrap_or("-"),
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Job Detail View
// --------------------------------------------------------

pub struct JobDetailView<'a> {
    data: &'a JobEntryViewModel,
    options: RenderOptions,
}

impl<'a> JobDetailView<'a> {
    pub fn new(data: &'a JobEntryViewModel, options: RenderOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for JobDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let job = self.data;
        writeln!(f, "ID:           {}", job.id)?;
        writeln!(f, "Site:         {}", job.site_name)?;
        writeln!(f, "Work content: {}", job.work_content)?;
        writeln!(
            f,
            "Work period:  {}",
            period(job.work_period_start, job.work_period_end)
        )?;
        writeln!(
            f,
            "Construction: {}",
            period(job.construction_period_start, job.construction_period_end)
        )?;
        writeln!(f, "Staff:        {}", staff_chips(&job.staff, self.options))?;
        writeln!(f, "Contractor:   {}", job.contractor.as_deref().unwrap_or("-"))?;
        writeln!(
            f,
            "Estimate:     {}",
            job.estimate_number.as_deref().unwrap_or("-")
        )?;
        if let Some(notes) = &job.notes {
            writeln!(f, "Notes:        {}", notes)?;
        }
        writeln!(f, "Created:      {}", job.created_at)?;
        Ok(())
    }
}

// --------------------------------------------------------
// Draft View
// --------------------------------------------------------

pub struct DraftView<'a> {
    data: &'a DraftViewModel,
}

impl<'a> DraftView<'a> {
    pub fn new(data: &'a DraftViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DraftView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let draft = &self.data.draft;
        if draft.is_empty() {
            writeln!(f, "Draft is empty.")?;
            return Ok(());
        }

        let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        let date = |s: &Option<String>| s.clone().unwrap_or_else(|| "-".to_string());

        writeln!(f, "Site:         {}", or_dash(&draft.form_data.site_name))?;
        writeln!(f, "Work content: {}", or_dash(&draft.form_data.work_content))?;
        writeln!(f, "Contractor:   {}", or_dash(&draft.form_data.contractor_id))?;
        writeln!(f, "Estimate:     {}", or_dash(&draft.form_data.estimate_id))?;
        writeln!(f, "Notes:        {}", or_dash(&draft.form_data.notes))?;
        writeln!(
            f,
            "Work period:  {} 〜 {}",
            date(&draft.work_period_start),
            date(&draft.work_period_end)
        )?;
        writeln!(
            f,
            "Construction: {} 〜 {}",
            date(&draft.construction_period_start),
            date(&draft.construction_period_end)
        )?;
        writeln!(f, "Staff:        {}", staff_names(&self.data.staff))?;

        if !self.data.missing.is_empty() {
            writeln!(f)?;
            writeln!(f, "Still required:")?;
            for message in &self.data.missing {
                writeln!(f, "  - {}", message)?;
            }
        }

        Ok(())
    }
}

use crate::args::JobFieldArgs;
use crate::handlers::{HandlerContext, lookup};
use crate::presentation::presenters;
use anyhow::Result;
use sitecal_engine::JobFilter;
use sitecal_runtime::{NewJob, SiteCal};
use sitecal_types::StaffDirectory;

pub fn add(
    app: &SiteCal,
    fields: JobFieldArgs,
    staff: Vec<String>,
    from_draft: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let roster = app.staff().list()?;
    let directory = StaffDirectory::new(&roster);

    let job = if from_draft {
        app.jobs().register_from_draft()?
    } else {
        let reference = app.reference();
        let new_job = NewJob {
            site_name: fields.site_name.unwrap_or_default(),
            work_content: fields.work_content.unwrap_or_default(),
            contractor_id: fields
                .contractor
                .map(|raw| lookup::contractor_id(reference, &raw))
                .transpose()?,
            estimate_id: fields
                .estimate
                .map(|raw| lookup::estimate_id(reference, &raw))
                .transpose()?,
            notes: fields.notes,
            work_period_start: fields.start,
            work_period_end: fields.end,
            construction_period_start: fields.construction_start,
            construction_period_end: fields.construction_end,
            selected_staff: lookup::staff_ids(&staff, directory)?,
        };
        app.jobs().register(new_job)?
    };

    let entry = presenters::job_entry(&job, directory, app.reference(), app.utc_offset());
    ctx.render(presenters::present_job_registered(entry))
}

pub fn list(app: &SiteCal, filter: JobFilter, ctx: &HandlerContext) -> Result<()> {
    let jobs = app.jobs().list()?;
    let roster = app.staff().list()?;
    let directory = StaffDirectory::new(&roster);
    let zone = app.utc_offset();

    let entries = filter
        .apply(&jobs, app.reference())
        .into_iter()
        .map(|job| presenters::job_entry(job, directory, app.reference(), zone))
        .collect();

    ctx.render(presenters::present_job_list(entries, jobs.len(), &filter))
}

pub fn show(app: &SiteCal, id: &str, ctx: &HandlerContext) -> Result<()> {
    let job = app.jobs().get(id)?;
    let roster = app.staff().list()?;
    let entry = presenters::job_entry(
        &job,
        StaffDirectory::new(&roster),
        app.reference(),
        app.utc_offset(),
    );
    ctx.render(presenters::present_job_detail(entry))
}

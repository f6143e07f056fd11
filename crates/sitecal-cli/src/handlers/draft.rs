use crate::args::JobFieldArgs;
use crate::handlers::{HandlerContext, lookup};
use crate::presentation::presenters;
use anyhow::Result;
use sitecal_runtime::{DraftUpdate, SiteCal};
use sitecal_types::{StaffDirectory, StaffId};

pub fn save(
    app: &SiteCal,
    fields: JobFieldArgs,
    add_staff: Vec<String>,
    remove_staff: Vec<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let roster = app.staff().list()?;
    let directory = StaffDirectory::new(&roster);
    let reference = app.reference();

    let update = DraftUpdate {
        site_name: fields.site_name,
        work_content: fields.work_content,
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
        add_staff: lookup::staff_ids(&add_staff, directory)?,
        // Removal accepts ids that have since left the roster.
        remove_staff: remove_staff
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(StaffId::from)
            .collect(),
    };

    let draft = app.draft().save(update)?;
    ctx.render(presenters::present_draft(
        draft,
        directory,
        app.utc_offset(),
        true,
    ))
}

pub fn show(app: &SiteCal, ctx: &HandlerContext) -> Result<()> {
    let roster = app.staff().list()?;
    let draft = app.draft().show()?;
    ctx.render(presenters::present_draft(
        draft,
        StaffDirectory::new(&roster),
        app.utc_offset(),
        false,
    ))
}

pub fn clear(app: &SiteCal, ctx: &HandlerContext) -> Result<()> {
    app.draft().clear()?;
    ctx.render(presenters::present_draft_cleared())
}

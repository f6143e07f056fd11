use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use sitecal_runtime::{NewStaff, SiteCal, StaffUpdate};

pub fn list(app: &SiteCal, ctx: &HandlerContext) -> Result<()> {
    let members = app.staff().list()?;
    let jobs = app.jobs().list()?;
    ctx.render(presenters::present_staff_list(&members, &jobs))
}

pub fn add(app: &SiteCal, new_staff: NewStaff, ctx: &HandlerContext) -> Result<()> {
    let member = app.staff().add(new_staff)?;
    let jobs = app.jobs().list()?;
    ctx.render(presenters::present_staff_saved(&member, &jobs, true))
}

pub fn edit(app: &SiteCal, id: &str, update: StaffUpdate, ctx: &HandlerContext) -> Result<()> {
    let member = app.staff().edit(id, update)?;
    let jobs = app.jobs().list()?;
    ctx.render(presenters::present_staff_saved(&member, &jobs, false))
}

pub fn remove(app: &SiteCal, id: &str, ctx: &HandlerContext) -> Result<()> {
    let member = app.staff().remove(id)?;
    let jobs = app.jobs().list()?;
    ctx.render(presenters::present_staff_removed(&member, &jobs))
}

pub fn colors(ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_palette())
}

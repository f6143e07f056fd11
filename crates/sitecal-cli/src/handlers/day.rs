use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use chrono::NaiveDate;
use sitecal_engine::JobFilter;
use sitecal_runtime::SiteCal;

pub fn handle(
    app: &SiteCal,
    date: NaiveDate,
    filter: JobFilter,
    ctx: &HandlerContext,
) -> Result<()> {
    let detail = app.calendar().day(date, &filter)?;
    ctx.render(presenters::present_day(detail, &filter))
}

use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use chrono::Local;
use sitecal_engine::calendar::is_on_date;
use sitecal_engine::{CalendarMonth, JobFilter};
use sitecal_runtime::SiteCal;

pub fn handle(
    app: &SiteCal,
    year: Option<i32>,
    month: Option<u32>,
    filter: JobFilter,
    ctx: &HandlerContext,
) -> Result<()> {
    let today = Local::now().date_naive();
    let current = CalendarMonth::containing(today);
    let shown = match (year, month) {
        (None, None) => current,
        (Some(year), None) => current.with_year(year)?,
        (year, Some(month)) => CalendarMonth::new(year.unwrap_or(current.year()), month)?,
    };

    let view = app.calendar().month(shown, &filter, Some(today))?;
    let roster = app.staff().list()?;
    let jobs = app.jobs().list()?;
    let zone = app.utc_offset();
    let job_count = filter
        .apply(&jobs, app.reference())
        .into_iter()
        .filter(|job| shown.days().any(|date| is_on_date(date, job, zone)))
        .count();

    let view_model =
        presenters::present_calendar(shown, view, &filter, &roster, job_count, Some(today));
    ctx.render(view_model)
}

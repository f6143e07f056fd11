use chrono::{Datelike, NaiveDate};
use sitecal_engine::{
    CalendarMonth, DayDetail, JobFilter, MonthView, StaffFilter, year_options,
};
use sitecal_types::{StaffMember, format_calendar_date, resolve_color};

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CalendarViewModel, CommandResultViewModel, DayViewModel, FilterSummary, Guidance, LegendEntry,
};

pub fn filter_summary(filter: &JobFilter) -> FilterSummary {
    FilterSummary {
        staff: filter.staff.to_string(),
        query: (!filter.query.is_empty()).then(|| filter.query.clone()),
    }
}

pub fn present_calendar(
    month: CalendarMonth,
    view: MonthView,
    filter: &JobFilter,
    roster: &[StaffMember],
    job_count: usize,
    today: Option<NaiveDate>,
) -> CommandResultViewModel<CalendarViewModel> {
    let legend = roster
        .iter()
        .filter(|m| match &filter.staff {
            StaffFilter::All => true,
            StaffFilter::Only(id) => &m.id == id,
        })
        .map(|m| LegendEntry {
            id: m.id.to_string(),
            name: m.name.clone(),
            color: resolve_color(&m.color).to_hex(),
        })
        .collect();

    let summary = filter_summary(filter);
    let filtered = summary.is_active();

    let years = today
        .map(|d| year_options(d.year()))
        .unwrap_or_else(|| year_options(view.year));

    let content = CalendarViewModel {
        year: view.year,
        month: view.month,
        today,
        years,
        filter: summary,
        legend,
        job_count,
        cells: view.cells,
    };

    let (prev, next) = (month.prev(), month.next());
    let mut result = CommandResultViewModel::new(content)
        .with_suggestion(
            Guidance::new("Previous month").with_command(fmt::calendar(prev.year(), prev.month())),
        )
        .with_suggestion(
            Guidance::new("Next month").with_command(fmt::calendar(next.year(), next.month())),
        );

    if job_count == 0 {
        if filtered {
            result = result.with_suggestion(
                Guidance::new("Nothing matches the filter; show every staff member")
                    .with_command(cmd::CALENDAR_ALL_STAFF),
            );
        } else {
            result = result
                .with_suggestion(Guidance::new("Register a job").with_command(cmd::JOB_ADD));
        }
    } else if let Some(day) = today {
        result = result.with_suggestion(
            Guidance::new("See everything scheduled today")
                .with_command(fmt::day(&format_calendar_date(day))),
        );
    }

    result
}

pub fn present_day(detail: DayDetail, filter: &JobFilter) -> CommandResultViewModel<DayViewModel> {
    let date = detail.date;
    let content = DayViewModel {
        date,
        filter: filter_summary(filter),
        entries: detail.entries,
    };

    let mut result = CommandResultViewModel::new(content);
    let month = CalendarMonth::containing(date);
    result = result.with_suggestion(
        Guidance::new("Back to the month view")
            .with_command(fmt::calendar(month.year(), month.month())),
    );
    if let Some(first) = result.content.entries.first() {
        let show = fmt::job_show(first.job_id.as_str());
        result = result.with_suggestion(Guidance::new("Show a job in full").with_command(show));
    }

    result
}

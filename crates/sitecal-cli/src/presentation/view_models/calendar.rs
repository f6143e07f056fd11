use chrono::NaiveDate;
use serde::Serialize;
use sitecal_engine::{CalendarCell, DayDetailEntry};
use std::fmt;

use super::{CreateView, RenderOptions};

#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    pub staff: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl FilterSummary {
    pub fn is_active(&self) -> bool {
        self.staff != "all" || self.query.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct CalendarViewModel {
    pub year: i32,
    pub month: u32,
    pub today: Option<NaiveDate>,
    /// Years offered for quick navigation around today
    pub years: Vec<i32>,
    pub filter: FilterSummary,
    pub legend: Vec<LegendEntry>,
    /// Distinct jobs drawn somewhere in this month
    pub job_count: usize,
    pub cells: Vec<CalendarCell>,
}

#[derive(Debug, Serialize)]
pub struct DayViewModel {
    pub date: NaiveDate,
    pub filter: FilterSummary,
    pub entries: Vec<DayDetailEntry>,
}

impl CreateView for CalendarViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::calendar::CalendarView;
        Box::new(CalendarView::new(self, options))
    }
}

impl CreateView for DayViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::calendar::DayView;
        Box::new(DayView::new(self, options))
    }
}

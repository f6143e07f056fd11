use chrono::Datelike;
use owo_colors::OwoColorize;
use sitecal_engine::{CalendarCell, CellEntry, DayCell, PeriodRole};
use std::fmt;

use super::{WEEKDAY_LABELS, paint, swatch};
use crate::presentation::formatters::{fit, pad};
use crate::presentation::view_models::{
    CalendarViewModel, DayViewModel, FilterSummary, RenderOptions,
};

/// Columns per day cell, separator excluded
const CELL_WIDTH: usize = 14;

fn filter_line(filter: &FilterSummary) -> Option<String> {
    if !filter.is_active() {
        return None;
    }
    let mut parts = Vec::new();
    if filter.staff != "all" {
        parts.push(format!("staff={}", filter.staff));
    }
    if let Some(q) = &filter.query {
        parts.push(format!("query=\"{}\"", q));
    }
    Some(format!("Filter: {}", parts.join(" ")))
}

// --------------------------------------------------------
// Month grid
// --------------------------------------------------------

pub struct CalendarView<'a> {
    data: &'a CalendarViewModel,
    options: RenderOptions,
}

impl<'a> CalendarView<'a> {
    pub fn new(data: &'a CalendarViewModel, options: RenderOptions) -> Self {
        Self { data, options }
    }

    fn band_lines(&self, entry: &CellEntry) -> Vec<String> {
        entry
            .bands
            .iter()
            .map(|band| {
                let left = if band.rounded_left { "[" } else { " " };
                let right = if band.rounded_right { "]" } else { " " };
                let text = format!("{}{}{}", left, fit(&band.label, CELL_WIDTH - 2), right);
                paint(&text, &band.color, self.options.color)
            })
            .collect()
    }

    fn day_number(&self, day: &DayCell) -> String {
        let label = if day.is_today {
            format!("{:>2}*", day.date.day())
        } else {
            format!("{:>2}", day.date.day())
        };
        let padded = pad(&label, CELL_WIDTH);
        if day.is_today && self.options.color {
            padded.bold().underline().to_string()
        } else {
            padded
        }
    }

    /// Lines below the day number: one per staff band, then the overflow count
    fn cell_body(&self, cell: &CalendarCell) -> Vec<String> {
        let CalendarCell::Day(day) = cell else {
            return Vec::new();
        };

        let mut lines: Vec<String> = day
            .entries
            .iter()
            .flat_map(|entry| self.band_lines(entry))
            .collect();
        if day.overflow > 0 {
            lines.push(pad(&format!(" +{}件", day.overflow), CELL_WIDTH));
        }
        lines
    }
}

impl<'a> fmt::Display for CalendarView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let title = format!("{}年{}月", self.data.year, self.data.month);
        if self.options.color {
            writeln!(f, "{}", title.bold())?;
        } else {
            writeln!(f, "{}", title)?;
        }
        if let Some(line) = filter_line(&self.data.filter) {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;

        let blank = " ".repeat(CELL_WIDTH);
        let header: Vec<String> = WEEKDAY_LABELS
            .iter()
            .map(|label| pad(&format!(" {}", label), CELL_WIDTH))
            .collect();
        writeln!(f, "{}", header.join("│").trim_end())?;
        let rule = "─".repeat(CELL_WIDTH);
        writeln!(f, "{}", vec![rule.as_str(); 7].join("┼"))?;

        for week in self.data.cells.chunks(7) {
            let numbers: Vec<String> = week
                .iter()
                .map(|cell| match cell {
                    CalendarCell::Blank => blank.clone(),
                    CalendarCell::Day(day) => self.day_number(day),
                })
                .collect();
            writeln!(f, "{}", numbers.join("│"))?;

            let bodies: Vec<Vec<String>> = week.iter().map(|c| self.cell_body(c)).collect();
            let height = bodies.iter().map(Vec::len).max().unwrap_or(0);
            for row in 0..height {
                let line: Vec<&str> = bodies
                    .iter()
                    .map(|body| body.get(row).map(String::as_str).unwrap_or(blank.as_str()))
                    .collect();
                writeln!(f, "{}", line.join("│"))?;
            }
            writeln!(f, "{}", vec![rule.as_str(); 7].join("┼"))?;
        }

        if !self.data.legend.is_empty() {
            let legend: Vec<String> = self
                .data
                .legend
                .iter()
                .map(|entry| {
                    let mark = swatch(&entry.color, self.options.color);
                    if mark.is_empty() {
                        format!("{} {}", entry.id, entry.name)
                    } else {
                        format!("{} {}", mark, entry.name)
                    }
                })
                .collect();
            writeln!(f, "{}", legend.join("  "))?;
        }
        writeln!(f, "{} job(s) this month", self.data.job_count)?;

        Ok(())
    }
}

// --------------------------------------------------------
// Day detail
// --------------------------------------------------------

fn role_label(role: PeriodRole) -> &'static str {
    match role {
        PeriodRole::Single => "1日",
        PeriodRole::Start => "開始",
        PeriodRole::Middle => "継続",
        PeriodRole::End => "終了",
        PeriodRole::None => "",
    }
}

pub struct DayView<'a> {
    data: &'a DayViewModel,
    options: RenderOptions,
}

impl<'a> DayView<'a> {
    pub fn new(data: &'a DayViewModel, options: RenderOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for DayView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let weekday = WEEKDAY_LABELS[self.data.date.weekday().num_days_from_sunday() as usize];
        writeln!(f, "{} ({})", self.data.date.format("%Y-%m-%d"), weekday)?;
        if let Some(line) = filter_line(&self.data.filter) {
            writeln!(f, "{}", line)?;
        }

        if self.data.entries.is_empty() {
            writeln!(f, "No jobs scheduled.")?;
            return Ok(());
        }

        for entry in &self.data.entries {
            writeln!(f)?;
            let title = format!("[{}] {}", role_label(entry.role), entry.site_name);
            if self.options.color {
                writeln!(f, "{}", title.bold())?;
            } else {
                writeln!(f, "{}", title)?;
            }

            let chips: Vec<String> = entry
                .staff
                .iter()
                .map(|chip| paint(&format!(" {} ", chip.name), &chip.color, self.options.color))
                .collect();
            if chips.is_empty() || !self.options.color {
                writeln!(f, "  Staff:      {}", entry.staff_names)?;
            } else {
                writeln!(f, "  Staff:      {}", chips.join(" "))?;
            }
            writeln!(f, "  Contractor: {}", entry.contractor)?;
            writeln!(f, "  Estimate:   {}", entry.estimate_number)?;
            writeln!(f, "  Work:       {}", entry.work_content)?;
            writeln!(f, "  ID:         {}", entry.job_id)?;
        }

        Ok(())
    }
}

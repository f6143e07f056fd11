pub mod calendar;
pub mod common;
pub mod export;
pub mod job;
pub mod result;
pub mod staff;

pub use calendar::{CalendarViewModel, DayViewModel, FilterSummary, LegendEntry};
pub use common::{Guidance, OutputFormat, RenderOptions, StatusBadge, StatusLevel};
pub use export::{ExportResultViewModel, ExportedFileViewModel};
pub use job::{
    DraftViewModel, JobDetailViewModel, JobEntryViewModel, JobListViewModel, MessageViewModel,
    StaffRef,
};
pub use result::CommandResultViewModel;
pub use staff::{PaletteViewModel, StaffEntryViewModel, StaffListViewModel, SwatchViewModel};

use std::fmt;

/// Bridge from a view model to the text view that lays it out.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a>;
}

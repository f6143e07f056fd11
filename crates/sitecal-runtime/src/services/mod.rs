mod calendar;
mod draft;
mod export;
mod jobs;
mod staff;

pub use calendar::CalendarOps;
pub use draft::{DraftOps, DraftUpdate};
pub use export::{ExportOps, ExportRequest, ExportSelection};
pub use jobs::{JobOps, NewJob};
pub use staff::{NewStaff, StaffOps, StaffUpdate};

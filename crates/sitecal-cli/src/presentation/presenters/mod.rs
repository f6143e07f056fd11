pub mod calendar;
pub mod export;
pub mod job;
pub mod staff;

pub use calendar::{filter_summary, present_calendar, present_day};
pub use export::present_export;
pub use job::{
    job_entry, present_draft, present_draft_cleared, present_guidance, present_job_detail,
    present_job_list, present_job_registered,
};
pub use staff::{
    present_palette, present_staff_list, present_staff_removed, present_staff_saved, staff_entry,
};

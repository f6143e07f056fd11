mod context;
mod lookup;

pub mod calendar;
pub mod day;
pub mod draft;
pub mod export;
pub mod job;
pub mod staff;

pub use context::HandlerContext;

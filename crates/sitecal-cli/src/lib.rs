// sitecal CLI - registers jobs, draws the staff calendar and exports data.
//
// Handlers load through `sitecal_runtime::SiteCal`, presenters turn engine
// output into view models, and the console renderer prints either the text
// view or the full view model as JSON.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, DraftCommand, JobCommand, LogLevel, OutputFormat, StaffCommand};
pub use commands::run;
pub use logging::init_logging;

// Runtime module - Data directory, persisted collections and the services
// built on the engine. The CLI talks to everything through `SiteCal`.

pub mod config;
pub mod error;
pub mod services;
pub mod storage;
mod workspace;

pub use config::{CONFIG_FILE, Config, ExportConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use services::{
    CalendarOps, DraftOps, DraftUpdate, ExportOps, ExportRequest, ExportSelection, JobOps, NewJob,
    NewStaff, StaffOps, StaffUpdate,
};
pub use storage::KeyValueStore;
pub use workspace::{REFERENCE_FILE, SiteCal, load_reference};

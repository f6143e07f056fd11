// Namespaced subcommands: `job`, `staff` and `job draft` group the record
// operations; `calendar`, `day` and `export` are the read-only views.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sitecal")]
#[command(
    about = "Register jobs, assign staff and view them on a monthly calendar",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $SITECAL_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

use super::common::FilterArgs;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use sitecal_engine::{ExportStyle, StaffFilter};
use sitecal_runtime::ExportSelection;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show a month of jobs as a staff-colored calendar")]
    Calendar {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    #[command(about = "List every job scheduled on one date")]
    Day {
        date: NaiveDate,

        #[command(flatten)]
        filter: FilterArgs,
    },

    #[command(about = "Register and inspect jobs")]
    Job {
        #[command(subcommand)]
        command: JobCommand,
    },

    #[command(about = "Manage the staff roster")]
    Staff {
        #[command(subcommand)]
        command: StaffCommand,
    },

    #[command(about = "Export jobs and/or staff as CSV, TSV or JSON")]
    Export {
        #[arg(long, default_value = "jobs", help = "jobs, staff or both")]
        dataset: ExportSelection,

        #[arg(long, help = "csv, tsv (alias: excel) or json [default: from config]")]
        style: Option<ExportStyle>,

        #[arg(long, help = "Earliest work date to include (YYYY-MM-DD)")]
        from: Option<NaiveDate>,

        #[arg(long, help = "Latest work date to include (YYYY-MM-DD)")]
        to: Option<NaiveDate>,

        #[arg(long, default_value = "all")]
        staff: StaffFilter,

        #[arg(long, help = "Leave the notes column empty")]
        no_notes: bool,

        #[arg(long, help = "Use FileMaker field names for the job export")]
        filemaker: bool,

        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

/// Text fields of the registration form
#[derive(Debug, Clone, Default, Args)]
pub struct JobFieldArgs {
    #[arg(long = "site")]
    pub site_name: Option<String>,

    #[arg(long = "content")]
    pub work_content: Option<String>,

    /// Contractor id, code or unique name fragment
    #[arg(long)]
    pub contractor: Option<String>,

    /// Estimate id, number or unique project name fragment
    #[arg(long)]
    pub estimate: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long, help = "First work day (YYYY-MM-DD)")]
    pub start: Option<NaiveDate>,

    #[arg(long, help = "Last work day (YYYY-MM-DD)")]
    pub end: Option<NaiveDate>,

    #[arg(long)]
    pub construction_start: Option<NaiveDate>,

    #[arg(long)]
    pub construction_end: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum JobCommand {
    #[command(about = "Register a job")]
    Add {
        #[command(flatten)]
        fields: JobFieldArgs,

        /// Assigned staff ids, in display order
        #[arg(long, value_delimiter = ',')]
        staff: Vec<String>,

        #[arg(
            long,
            help = "Register the saved draft instead",
            conflicts_with_all = [
                "site_name",
                "work_content",
                "contractor",
                "estimate",
                "notes",
                "start",
                "end",
                "construction_start",
                "construction_end",
                "staff",
            ]
        )]
        from_draft: bool,
    },

    #[command(about = "List registered jobs")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    #[command(about = "Show one job")]
    Show { id: String },

    #[command(about = "Edit the saved registration draft")]
    Draft {
        #[command(subcommand)]
        command: DraftCommand,
    },
}

#[derive(Subcommand)]
pub enum DraftCommand {
    #[command(about = "Merge fields into the saved draft")]
    Save {
        #[command(flatten)]
        fields: JobFieldArgs,

        #[arg(long, value_delimiter = ',')]
        add_staff: Vec<String>,

        #[arg(long, value_delimiter = ',')]
        remove_staff: Vec<String>,
    },

    #[command(about = "Show the saved draft")]
    Show,

    #[command(about = "Discard the saved draft")]
    Clear,
}

#[derive(Subcommand)]
pub enum StaffCommand {
    #[command(about = "List staff members")]
    List,

    #[command(about = "Add a staff member")]
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "bg-blue-500", help = "Palette name or #rrggbb")]
        color: String,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    #[command(about = "Edit a staff member (an empty value clears an optional field)")]
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    #[command(about = "Remove a staff member (jobs keep the assignment)")]
    Remove { id: String },

    #[command(about = "List the available colors")]
    Colors,
}

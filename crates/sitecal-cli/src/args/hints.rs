pub mod cmd {
    // Job commands
    pub const JOB_ADD: &str =
        "sitecal job add --site <NAME> --start <YYYY-MM-DD> --end <YYYY-MM-DD> --staff <ID>";
    pub const JOB_ADD_FROM_DRAFT: &str = "sitecal job add --from-draft";
    pub const JOB_LIST: &str = "sitecal job list";
    pub const DRAFT_SHOW: &str = "sitecal job draft show";

    // Staff commands
    pub const STAFF_LIST: &str = "sitecal staff list";
    pub const STAFF_ADD: &str = "sitecal staff add --name <NAME> --color <COLOR>";
    pub const STAFF_COLORS: &str = "sitecal staff colors";

    // Views
    pub const CALENDAR: &str = "sitecal calendar";
    pub const CALENDAR_ALL_STAFF: &str = "sitecal calendar --staff all";
    pub const EXPORT_JOBS: &str = "sitecal export --dataset jobs --style csv";
}

pub mod fmt {
    pub fn calendar(year: i32, month: u32) -> String {
        format!("sitecal calendar --year {} --month {}", year, month)
    }

    pub fn day(date: &str) -> String {
        format!("sitecal day {}", date)
    }

    pub fn job_show(id: &str) -> String {
        format!("sitecal job show {}", id)
    }
}

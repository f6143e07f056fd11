use clap::Args;
use sitecal_engine::{JobFilter, StaffFilter};

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Only jobs assigned to this staff id ("all" for everyone)
    #[arg(long, default_value = "all")]
    pub staff: StaffFilter,

    /// Case-insensitive match on site, work content, contractor or estimate
    #[arg(long, short = 'q')]
    pub query: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> JobFilter {
        JobFilter::new()
            .with_staff(self.staff.clone())
            .with_query(self.query.clone().unwrap_or_default())
    }
}

use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use sitecal_engine::{ExportStyle, StaffFilter};
use sitecal_runtime::{ExportRequest, ExportSelection, SiteCal};
use std::path::PathBuf;

/// Command-line overrides on top of the `[export]` config section
pub struct ExportArgs {
    pub dataset: ExportSelection,
    pub style: Option<ExportStyle>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub staff: StaffFilter,
    pub no_notes: bool,
    pub filemaker: bool,
    pub output_dir: Option<PathBuf>,
}

pub fn handle(app: &SiteCal, args: ExportArgs, ctx: &HandlerContext) -> Result<()> {
    let mut request = ExportRequest::from_config(&app.config().export);
    request.selection = args.dataset;
    if let Some(style) = args.style {
        request.style = style;
    }
    request.from = args.from;
    request.to = args.to;
    request.staff = args.staff;
    if args.no_notes {
        request.include_notes = false;
    }
    request.filemaker = args.filemaker;

    let exports = app.exports();
    let artifacts = exports.build(&request, Local::now().date_naive())?;
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| exports.default_output_dir());
    let written = exports.write(&artifacts, &output_dir)?;

    ctx.render(presenters::present_export(&artifacts, written))
}

use super::args::{Cli, Commands, DraftCommand, JobCommand, StaffCommand};
use super::handlers::{self, HandlerContext};
use crate::presentation::presenters;
use anyhow::{Context, Result};
use sitecal_runtime::{NewStaff, SiteCal, StaffUpdate, resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let app = SiteCal::open(data_dir.clone())
        .with_context(|| format!("opening data directory {}", data_dir.display()))?;
    let ctx = HandlerContext::new(cli.format);

    let Some(command) = cli.command else {
        let jobs = app.jobs().list()?;
        return ctx.render(presenters::present_guidance(jobs.len(), app.data_dir()));
    };

    match command {
        Commands::Calendar {
            year,
            month,
            filter,
        } => handlers::calendar::handle(&app, year, month, filter.to_filter(), &ctx),

        Commands::Day { date, filter } => {
            handlers::day::handle(&app, date, filter.to_filter(), &ctx)
        }

        Commands::Job { command } => match command {
            JobCommand::Add {
                fields,
                staff,
                from_draft,
            } => handlers::job::add(&app, fields, staff, from_draft, &ctx),
            JobCommand::List { filter } => handlers::job::list(&app, filter.to_filter(), &ctx),
            JobCommand::Show { id } => handlers::job::show(&app, &id, &ctx),
            JobCommand::Draft { command } => match command {
                DraftCommand::Save {
                    fields,
                    add_staff,
                    remove_staff,
                } => handlers::draft::save(&app, fields, add_staff, remove_staff, &ctx),
                DraftCommand::Show => handlers::draft::show(&app, &ctx),
                DraftCommand::Clear => handlers::draft::clear(&app, &ctx),
            },
        },

        Commands::Staff { command } => match command {
            StaffCommand::List => handlers::staff::list(&app, &ctx),
            StaffCommand::Add {
                name,
                color,
                position,
                phone,
                email,
            } => handlers::staff::add(
                &app,
                NewStaff {
                    name,
                    color,
                    position,
                    phone,
                    email,
                },
                &ctx,
            ),
            StaffCommand::Edit {
                id,
                name,
                color,
                position,
                phone,
                email,
            } => handlers::staff::edit(
                &app,
                &id,
                StaffUpdate {
                    name,
                    color,
                    position,
                    phone,
                    email,
                },
                &ctx,
            ),
            StaffCommand::Remove { id } => handlers::staff::remove(&app, &id, &ctx),
            StaffCommand::Colors => handlers::staff::colors(&ctx),
        },

        Commands::Export {
            dataset,
            style,
            from,
            to,
            staff,
            no_notes,
            filemaker,
            output_dir,
        } => handlers::export::handle(
            &app,
            handlers::export::ExportArgs {
                dataset,
                style,
                from,
                to,
                staff,
                no_notes,
                filemaker,
                output_dir,
            },
            &ctx,
        ),
    }
}

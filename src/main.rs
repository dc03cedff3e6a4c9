use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wedding_planner::cli::{
    handle_budget_command, handle_export_command, handle_guest_command, handle_import_command,
    handle_schedule_command, handle_task_command, BudgetCommands, GuestCommands, ScheduleCommands,
    TaskCommands,
};
use wedding_planner::config::{PlannerPaths, Settings};
use wedding_planner::reports::OverviewReport;
use wedding_planner::storage::Session;
use wedding_planner::workbook::SheetKind;

/// Environment variable holding the log filter
const LOG_ENV: &str = "WEDDING_LOG";

#[derive(Parser)]
#[command(
    name = "wedding",
    version,
    about = "Wedding planner: guests, budget, tasks and schedule",
    long_about = "Keeps track of the guest list, the budget, tasks and the \
                  wedding-day schedule, and moves everything in and out of \
                  an Excel workbook."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Countdown, budget used, key figures and charts
    Overview,

    /// Guest management commands
    #[command(subcommand)]
    Guest(GuestCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Planning tasks
    #[command(subcommand)]
    Task(TaskCommands),

    /// Wedding-day schedule
    #[command(subcommand)]
    Schedule(ScheduleCommands),

    /// Export everything to an Excel workbook
    Export {
        /// Output path (defaults to the configured file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export only this sheet (Gjester, Budsjett, Oppgaver, Tidsplan)
        #[arg(short, long)]
        sheet: Option<SheetKind>,
    },

    /// Replace all data with the contents of an Excel workbook
    Import {
        /// Path to the workbook
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

impl Commands {
    fn is_mutating(&self) -> bool {
        match self {
            Self::Guest(cmd) => cmd.is_mutating(),
            Self::Budget(cmd) => cmd.is_mutating(),
            Self::Import { .. } => true,
            Self::Overview
            | Self::Task(_)
            | Self::Schedule(_)
            | Self::Export { .. }
            | Self::Config => false,
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Bryllupsplanlegger");
        println!();
        println!("Run 'wedding --help' for usage information.");
        println!("Run 'wedding overview' for the dashboard.");
        return Ok(());
    };

    let session_file = paths.session_file();
    let mut session = Session::load(&session_file)
        .with_context(|| format!("could not load {}", session_file.display()))?
        .unwrap_or_else(|| Session::with_total_budget(settings.total_budget));
    let mutating = command.is_mutating();

    match command {
        Commands::Overview => {
            let event = settings.event_date()?;
            let today = Local::now().date_naive();
            let report = OverviewReport::generate(&session, today, event);
            print!("{}", report.format_terminal(&settings.currency_suffix));
        }
        Commands::Guest(cmd) => handle_guest_command(&mut session, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut session, &settings, cmd)?,
        Commands::Task(cmd) => handle_task_command(&session, cmd)?,
        Commands::Schedule(cmd) => handle_schedule_command(&session, cmd)?,
        Commands::Export { output, sheet } => {
            handle_export_command(&session, &settings, output, sheet)?
        }
        Commands::Import { file } => handle_import_command(&mut session, &file)?,
        Commands::Config => {
            println!("Bryllupsplanlegger Configuration");
            println!("================================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Session file:     {}", session_file.display());
            println!();
            println!("Settings:");
            println!("  Total budget:   {}", settings.total_budget);
            println!(
                "  Wedding date:   {}",
                settings.event_date().map(|d| d.to_string())?
            );
            println!("  Currency:       {}", settings.currency_suffix);
            println!("  Export file:    {}", settings.export_file_name);
        }
    }

    if mutating {
        paths.ensure_directories()?;
        session.save(&session_file)?;
    }

    Ok(())
}

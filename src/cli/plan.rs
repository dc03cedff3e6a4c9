//! Task and schedule CLI commands

use clap::Subcommand;

use crate::display::plan::{format_schedule, format_task_list};
use crate::error::PlannerResult;
use crate::storage::Session;

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// List the planning tasks
    List,
}

/// Schedule subcommands
#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// List the wedding-day schedule
    List,
}

/// Handle a task command
pub fn handle_task_command(session: &Session, cmd: TaskCommands) -> PlannerResult<()> {
    match cmd {
        TaskCommands::List => println!("{}", format_task_list(session.tasks.list())),
    }
    Ok(())
}

/// Handle a schedule command
pub fn handle_schedule_command(session: &Session, cmd: ScheduleCommands) -> PlannerResult<()> {
    match cmd {
        ScheduleCommands::List => println!("{}", format_schedule(session.schedule.list())),
    }
    Ok(())
}

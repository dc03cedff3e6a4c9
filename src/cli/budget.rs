//! Budget CLI commands
//!
//! Budget overview, category edits and the total budget.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::budget::{
    format_budget_comparison, format_budget_distribution, format_budget_summary,
    format_budget_table,
};
use crate::display::report::format_amount;
use crate::error::{PlannerError, PlannerResult};
use crate::models::BudgetLinePatch;
use crate::services::BudgetService;
use crate::storage::Session;

const CHART_WIDTH: usize = 30;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget table, key figures and charts
    Show,

    /// Edit the amounts or description of a category
    Edit {
        /// Category name (exact)
        category: String,
        #[arg(short, long)]
        budgeted: Option<i64>,
        #[arg(short, long)]
        actual: Option<i64>,
        /// Paid amount; capped at the actual amount
        #[arg(short, long)]
        paid: Option<i64>,
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Add a new category
    #[command(name = "add-category")]
    AddCategory {
        /// Category name
        name: String,
    },

    /// Set the total wedding budget
    Total {
        /// Amount in whole kroner
        amount: i64,
    },
}

impl BudgetCommands {
    /// Whether the command changes the session
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Show)
    }
}

/// Handle a budget command
pub fn handle_budget_command(
    session: &mut Session,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PlannerResult<()> {
    let suffix = settings.currency_suffix.as_str();

    match cmd {
        BudgetCommands::Show => {
            let lines = session.budget.list();

            println!("{}", format_budget_table(lines, suffix));
            println!();
            print!(
                "{}",
                format_budget_summary(lines, session.total_budget(), suffix)
            );
            println!();
            println!("Budsjett fordeling");
            print!("{}", format_budget_distribution(lines, CHART_WIDTH));
            let comparison = format_budget_comparison(lines, CHART_WIDTH, suffix);
            if !comparison.is_empty() {
                println!();
                println!("Budsjett vs. Faktisk vs. Betalt");
                print!("{}", comparison);
            }
        }

        BudgetCommands::Edit {
            category,
            budgeted,
            actual,
            paid,
            description,
        } => {
            let patch = BudgetLinePatch {
                budgeted,
                actual,
                paid,
                description,
            };
            if patch.is_empty() {
                return Err(PlannerError::Validation(
                    "Nothing to update; pass at least one amount or a description".into(),
                ));
            }

            let line = BudgetService::new(session).edit_line(&category, patch)?;
            println!("Budsjett for {} oppdatert!", line.category);
            println!("  Budsjettert: {}", format_amount(line.budgeted, suffix));
            println!("  Faktisk:     {}", format_amount(line.actual, suffix));
            println!("  Betalt:      {}", format_amount(line.paid, suffix));
        }

        BudgetCommands::AddCategory { name } => {
            let line = BudgetService::new(session).add_category(&name)?;
            println!("Kategori {} lagt til!", line.category);
        }

        BudgetCommands::Total { amount } => {
            BudgetService::new(session).set_total_budget(amount)?;
            println!("Totalt budsjett: {}", format_amount(amount, suffix));
        }
    }

    Ok(())
}

//! Guest CLI commands
//!
//! Listing with filters, single-guest add/edit/remove, and the CSV import
//! and export of the guest list.

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::guest::{format_guest_details, format_guest_list, format_selection_stats};
use crate::error::{PlannerError, PlannerResult};
use crate::export::export_guests_csv_file;
use crate::models::{Guest, GuestPatch, Relation, RsvpStatus};
use crate::reports::{filter_guests, GuestFilter, SelectionStats};
use crate::services::{GuestService, ImportService};
use crate::storage::Session;
use crate::workbook::columns::parse_bool;

/// Rows shown by `guest import --preview`
const PREVIEW_ROWS: usize = 5;

/// Guest subcommands
#[derive(Subcommand)]
pub enum GuestCommands {
    /// List guests, optionally filtered
    List {
        /// Only guests with this RSVP status (e.g. "Kommer")
        #[arg(short, long)]
        status: Option<RsvpStatus>,
        /// Only guests with this relation (e.g. "Venn brud")
        #[arg(short, long)]
        relation: Option<Relation>,
        /// Case-insensitive part of the name
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a single guest
    Add {
        /// Guest name
        name: String,
        #[arg(short, long, default_value = "Familie brud")]
        relation: Relation,
        #[arg(short, long, default_value = "Venter på svar")]
        status: RsvpStatus,
        /// Number of people including plus-ones
        #[arg(short, long, default_value = "1")]
        party_size: u32,
        /// Dietary or accessibility needs
        #[arg(long, default_value = "")]
        special_needs: String,
        /// Record the guest as not (yet) invited
        #[arg(long)]
        not_invited: bool,
    },

    /// Update a guest
    Edit {
        /// Guest name or id
        guest: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        relation: Option<Relation>,
        #[arg(short, long)]
        status: Option<RsvpStatus>,
        #[arg(short, long)]
        party_size: Option<u32>,
        #[arg(long)]
        special_needs: Option<String>,
        /// Invited, as ja/nei
        #[arg(long, value_parser = parse_bool)]
        invited: Option<bool>,
    },

    /// Remove a guest
    Remove {
        /// Guest name or id
        guest: String,
    },

    /// Append guests from a CSV file with at least a "Navn" column
    Import {
        /// Path to the CSV file
        file: PathBuf,
        /// Only show the first rows and the dropped columns
        #[arg(long)]
        preview: bool,
    },

    /// Write the guest list to a CSV file
    #[command(name = "export-csv")]
    ExportCsv {
        /// Output path
        file: PathBuf,
    },
}

impl GuestCommands {
    /// Whether the command changes the session
    pub fn is_mutating(&self) -> bool {
        match self {
            Self::Add { .. } | Self::Edit { .. } | Self::Remove { .. } => true,
            Self::Import { preview, .. } => !preview,
            Self::List { .. } | Self::ExportCsv { .. } => false,
        }
    }
}

/// Handle a guest command
pub fn handle_guest_command(session: &mut Session, cmd: GuestCommands) -> PlannerResult<()> {
    match cmd {
        GuestCommands::List {
            status,
            relation,
            search,
        } => {
            let filter = GuestFilter {
                status,
                relation,
                name_contains: search,
            };
            let selection = filter_guests(session.guests.list(), &filter);

            if selection.is_empty() {
                println!("Ingen gjester funnet som matcher kriteriene.");
                return Ok(());
            }

            println!("{}", format_guest_list(&selection));
            println!();
            println!("{}", format_selection_stats(&SelectionStats::of(&selection)));
        }

        GuestCommands::Add {
            name,
            relation,
            status,
            party_size,
            special_needs,
            not_invited,
        } => {
            let guest = Guest::new(name, relation)
                .with_status(status)
                .with_party_size(party_size)
                .with_special_needs(special_needs)
                .with_invited(!not_invited);

            let guest = GuestService::new(session).add_guest(guest)?;
            println!("Gjest {} lagt til!", guest.name);
            println!("  Id: {}", guest.id);
        }

        GuestCommands::Edit {
            guest,
            name,
            relation,
            status,
            party_size,
            special_needs,
            invited,
        } => {
            let patch = GuestPatch {
                name,
                relation,
                invited,
                rsvp_status: status,
                party_size,
                special_needs,
            };
            if patch.is_empty() {
                return Err(PlannerError::Validation(
                    "Nothing to update; pass at least one field".into(),
                ));
            }

            let mut service = GuestService::new(session);
            let id = service.resolve(&guest)?;
            let updated = service.update_guest(id, patch)?;
            println!("Gjest {} oppdatert!", updated.name);
            print!("{}", format_guest_details(&updated));
        }

        GuestCommands::Remove { guest } => {
            let mut service = GuestService::new(session);
            let id = service.resolve(&guest)?;
            let removed = service.remove_guest(id)?;
            println!("Gjest {} slettet!", removed.name);
        }

        GuestCommands::Import { file, preview } => {
            if preview {
                let parsed = ImportService::preview_guest_csv(&file, PREVIEW_ROWS)?;
                let rows: Vec<&Guest> = parsed.guests.iter().collect();
                println!("{}", format_guest_list(&rows));
                if !parsed.ignored_columns.is_empty() {
                    println!("Kolonner som ignoreres: {}", parsed.ignored_columns.join(", "));
                }
                return Ok(());
            }

            let result = ImportService::new(session).import_guests_file(&file)?;
            println!("{} gjester importert!", result.imported);
            if !result.ignored_columns.is_empty() {
                println!("Kolonner som ble ignorert: {}", result.ignored_columns.join(", "));
            }
        }

        GuestCommands::ExportCsv { file } => {
            let written = export_guests_csv_file(session.guests.list(), &file)?;
            println!("{} gjester skrevet til {}", written, file.display());
        }
    }

    Ok(())
}

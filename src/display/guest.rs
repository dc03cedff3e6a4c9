//! Guest display formatting
//!
//! Formats guests for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Guest;
use crate::reports::SelectionStats;

#[derive(Tabled)]
struct GuestRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Navn")]
    name: String,
    #[tabled(rename = "Relasjon")]
    relation: String,
    #[tabled(rename = "Invitert")]
    invited: String,
    #[tabled(rename = "RSVP Status")]
    rsvp_status: String,
    #[tabled(rename = "Antall gjester")]
    party_size: String,
    #[tabled(rename = "Spesielle behov")]
    special_needs: String,
}

impl From<&Guest> for GuestRow {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id.to_string(),
            name: guest.name.clone(),
            relation: guest.relation.map(|r| r.label().to_string()).unwrap_or_default(),
            invited: match guest.invited {
                Some(true) => "Ja".into(),
                Some(false) => "Nei".into(),
                None => String::new(),
            },
            rsvp_status: guest
                .rsvp_status
                .map(|s| s.label().to_string())
                .unwrap_or_default(),
            party_size: guest.party_size.map(|n| n.to_string()).unwrap_or_default(),
            special_needs: guest.special_needs.clone(),
        }
    }
}

/// Format a list of guests as a table
pub fn format_guest_list(guests: &[&Guest]) -> String {
    if guests.is_empty() {
        return "Ingen gjester funnet.".to_string();
    }

    let rows: Vec<GuestRow> = guests.iter().map(|g| GuestRow::from(*g)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format the figures for a filtered selection
pub fn format_selection_stats(stats: &SelectionStats) -> String {
    format!(
        "Viser {} gjester, totalt {} personer. Spesielle behov: {}",
        stats.rows, stats.people, stats.special_needs
    )
}

/// Format a single guest's details
pub fn format_guest_details(guest: &Guest) -> String {
    let mut output = String::new();

    output.push_str(&format!("Gjest: {}\n", guest.name));
    output.push_str(&format!("  Id:              {}\n", guest.id));
    if let Some(relation) = guest.relation {
        output.push_str(&format!("  Relasjon:        {}\n", relation));
    }
    if let Some(status) = guest.rsvp_status {
        output.push_str(&format!("  RSVP Status:     {}\n", status));
    }
    if let Some(party_size) = guest.party_size {
        output.push_str(&format!("  Antall gjester:  {}\n", party_size));
    }
    if guest.has_special_needs() {
        output.push_str(&format!("  Spesielle behov: {}\n", guest.special_needs));
    }

    output
}

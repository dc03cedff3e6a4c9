//! Guest service
//!
//! Adds, edits and removes guests, and resolves the name or id a user typed
//! into a single guest.

use tracing::info;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Guest, GuestId, GuestPatch};
use crate::storage::Session;

/// Service for guest management
pub struct GuestService<'a> {
    session: &'a mut Session,
}

impl<'a> GuestService<'a> {
    /// Create a new guest service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Add a single guest
    pub fn add_guest(&mut self, mut guest: Guest) -> PlannerResult<Guest> {
        guest.name = guest.name.trim().to_string();
        self.session.guests.add(guest.clone())?;
        info!(guest = %guest.name, id = %guest.id, "guest added");
        Ok(guest)
    }

    /// All guests whose name matches exactly
    pub fn find_by_name(&self, name: &str) -> Vec<&Guest> {
        self.session
            .guests
            .iter()
            .filter(|g| g.name == name)
            .collect()
    }

    /// Resolve a name or id into one guest id
    ///
    /// Names are tried first. Since names are not unique, a name shared by
    /// several guests is rejected and the caller must use an id instead. Ids
    /// may be given in full or as the short `gst-xxxxxxxx` form.
    pub fn resolve(&self, identifier: &str) -> PlannerResult<GuestId> {
        let identifier = identifier.trim();
        let by_name = self.find_by_name(identifier);

        match by_name.as_slice() {
            [guest] => return Ok(guest.id),
            [] => {}
            several => {
                let ids: Vec<String> = several.iter().map(|g| g.id.to_string()).collect();
                return Err(PlannerError::Validation(format!(
                    "'{}' matches {} guests ({}); use an id instead",
                    identifier,
                    several.len(),
                    ids.join(", ")
                )));
            }
        }

        if let Ok(id) = identifier.parse::<GuestId>() {
            if self.session.guests.get_by_id(id).is_some() {
                return Ok(id);
            }
        }

        let short = identifier.strip_prefix("gst-").unwrap_or_default();
        if !short.is_empty() {
            let mut matches = self
                .session
                .guests
                .iter()
                .filter(|g| g.id.as_uuid().to_string().starts_with(short));
            if let (Some(guest), None) = (matches.next(), matches.next()) {
                return Ok(guest.id);
            }
        }

        Err(PlannerError::guest_not_found(identifier))
    }

    /// Apply a partial update to a guest
    pub fn update_guest(&mut self, id: GuestId, patch: GuestPatch) -> PlannerResult<Guest> {
        let guest = self.session.guests.update_by_id(id, patch)?.clone();
        info!(guest = %guest.name, id = %guest.id, "guest updated");
        Ok(guest)
    }

    /// Remove a guest
    pub fn remove_guest(&mut self, id: GuestId) -> PlannerResult<Guest> {
        let guest = self.session.guests.remove_by_id(id)?;
        info!(guest = %guest.name, id = %guest.id, "guest removed");
        Ok(guest)
    }
}

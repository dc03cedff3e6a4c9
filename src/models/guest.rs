//! Guest model
//!
//! A guest row covers one invitation: the named guest plus any plus-ones
//! counted in the party size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::GuestId;

/// How a guest is related to the couple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "Familie brud")]
    FamilyBride,
    #[serde(rename = "Familie brudgom")]
    FamilyGroom,
    #[serde(rename = "Venn brud")]
    FriendBride,
    #[serde(rename = "Venn brudgom")]
    FriendGroom,
    #[serde(rename = "Kollega")]
    Colleague,
    #[serde(rename = "Annet")]
    Other,
}

impl Relation {
    /// All relations in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::FamilyBride,
            Self::FamilyGroom,
            Self::FriendBride,
            Self::FriendGroom,
            Self::Colleague,
            Self::Other,
        ]
    }

    /// The label used in sheets, CSV files and the terminal
    pub fn label(&self) -> &'static str {
        match self {
            Self::FamilyBride => "Familie brud",
            Self::FamilyGroom => "Familie brudgom",
            Self::FriendBride => "Venn brud",
            Self::FriendGroom => "Venn brudgom",
            Self::Colleague => "Kollega",
            Self::Other => "Annet",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::FamilyBride => "family-bride",
            Self::FamilyGroom => "family-groom",
            Self::FriendBride => "friend-bride",
            Self::FriendGroom => "friend-groom",
            Self::Colleague => "colleague",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Relation {
    type Err = String;

    /// Accepts the Norwegian label or the kebab-case key, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .find(|r| r.label().eq_ignore_ascii_case(s) || r.key().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown relation '{}'", s))
    }
}

/// Reply status of an invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RsvpStatus {
    #[default]
    #[serde(rename = "Venter på svar")]
    Pending,
    #[serde(rename = "Kommer")]
    Coming,
    #[serde(rename = "Kommer ikke")]
    NotComing,
}

impl RsvpStatus {
    /// All statuses in display order
    pub fn all() -> &'static [Self] {
        &[Self::Pending, Self::Coming, Self::NotComing]
    }

    /// The label used in sheets, CSV files and the terminal
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Venter på svar",
            Self::Coming => "Kommer",
            Self::NotComing => "Kommer ikke",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Coming => "coming",
            Self::NotComing => "not-coming",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RsvpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .find(|r| r.label().eq_ignore_ascii_case(s) || r.key().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown RSVP status '{}'", s))
    }
}

/// A guest (or guest party) on the list
///
/// Relation, invitation flag, status and party size are optional because a
/// CSV import leaves columns missing from the upload empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Session-local identifier
    pub id: GuestId,

    /// Guest name (required, not unique)
    pub name: String,

    pub relation: Option<Relation>,

    pub invited: Option<bool>,

    pub rsvp_status: Option<RsvpStatus>,

    /// Number of people including plus-ones
    pub party_size: Option<u32>,

    /// Dietary or accessibility needs; empty when none
    #[serde(default)]
    pub special_needs: String,
}

impl Guest {
    /// Create an invited guest of party size 1 awaiting a reply
    pub fn new(name: impl Into<String>, relation: Relation) -> Self {
        Self {
            id: GuestId::new(),
            name: name.into(),
            relation: Some(relation),
            invited: Some(true),
            rsvp_status: Some(RsvpStatus::Pending),
            party_size: Some(1),
            special_needs: String::new(),
        }
    }

    /// Create a guest with only a name; every other field is unset
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: GuestId::new(),
            name: name.into(),
            relation: None,
            invited: None,
            rsvp_status: None,
            party_size: None,
            special_needs: String::new(),
        }
    }

    pub fn with_status(mut self, status: RsvpStatus) -> Self {
        self.rsvp_status = Some(status);
        self
    }

    pub fn with_party_size(mut self, party_size: u32) -> Self {
        self.party_size = Some(party_size);
        self
    }

    pub fn with_special_needs(mut self, needs: impl Into<String>) -> Self {
        self.special_needs = needs.into();
        self
    }

    pub fn with_invited(mut self, invited: bool) -> Self {
        self.invited = Some(invited);
        self
    }

    /// People this row contributes to headcounts (0 when unset)
    pub fn headcount(&self) -> u64 {
        u64::from(self.party_size.unwrap_or(0))
    }

    /// Whether the guest has any special needs recorded
    pub fn has_special_needs(&self) -> bool {
        !self.special_needs.is_empty()
    }

    /// Validate the guest
    pub fn validate(&self) -> Result<(), GuestValidationError> {
        if self.name.trim().is_empty() {
            return Err(GuestValidationError::EmptyName);
        }

        if self.party_size == Some(0) {
            return Err(GuestValidationError::ZeroPartySize);
        }

        Ok(())
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Partial update of a guest; `None` leaves the field as it is
#[derive(Debug, Clone, Default)]
pub struct GuestPatch {
    pub name: Option<String>,
    pub relation: Option<Relation>,
    pub invited: Option<bool>,
    pub rsvp_status: Option<RsvpStatus>,
    pub party_size: Option<u32>,
    pub special_needs: Option<String>,
}

impl GuestPatch {
    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.relation.is_none()
            && self.invited.is_none()
            && self.rsvp_status.is_none()
            && self.party_size.is_none()
            && self.special_needs.is_none()
    }

    pub fn apply_to(self, guest: &mut Guest) {
        if let Some(name) = self.name {
            guest.name = name;
        }
        if let Some(relation) = self.relation {
            guest.relation = Some(relation);
        }
        if let Some(invited) = self.invited {
            guest.invited = Some(invited);
        }
        if let Some(status) = self.rsvp_status {
            guest.rsvp_status = Some(status);
        }
        if let Some(party_size) = self.party_size {
            guest.party_size = Some(party_size);
        }
        if let Some(needs) = self.special_needs {
            guest.special_needs = needs;
        }
    }
}

/// Validation errors for guests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestValidationError {
    EmptyName,
    ZeroPartySize,
}

impl fmt::Display for GuestValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Guest name cannot be empty"),
            Self::ZeroPartySize => write!(f, "Party size must be at least 1"),
        }
    }
}

impl std::error::Error for GuestValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_guest_defaults() {
        let guest = Guest::new("Kari Nordmann", Relation::FriendBride);
        assert_eq!(guest.name, "Kari Nordmann");
        assert_eq!(guest.invited, Some(true));
        assert_eq!(guest.rsvp_status, Some(RsvpStatus::Pending));
        assert_eq!(guest.party_size, Some(1));
        assert!(!guest.has_special_needs());
    }

    #[test]
    fn test_named_guest_is_unset() {
        let guest = Guest::named("Kari");
        assert!(guest.relation.is_none());
        assert!(guest.invited.is_none());
        assert!(guest.rsvp_status.is_none());
        assert_eq!(guest.headcount(), 0);
    }

    #[test]
    fn test_validation() {
        let mut guest = Guest::new("Ola", Relation::Colleague);
        assert!(guest.validate().is_ok());

        guest.name = "   ".into();
        assert_eq!(guest.validate(), Err(GuestValidationError::EmptyName));

        guest.name = "Ola".into();
        guest.party_size = Some(0);
        assert_eq!(guest.validate(), Err(GuestValidationError::ZeroPartySize));
    }

    #[test]
    fn test_relation_parsing() {
        assert_eq!("Venn brudgom".parse::<Relation>(), Ok(Relation::FriendGroom));
        assert_eq!("kollega".parse::<Relation>(), Ok(Relation::Colleague));
        assert_eq!("family-bride".parse::<Relation>(), Ok(Relation::FamilyBride));
        assert!("Nabo".parse::<Relation>().is_err());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("Kommer ikke".parse::<RsvpStatus>(), Ok(RsvpStatus::NotComing));
        assert_eq!("coming".parse::<RsvpStatus>(), Ok(RsvpStatus::Coming));
        assert_eq!("Venter på svar".parse::<RsvpStatus>(), Ok(RsvpStatus::Pending));
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut guest = Guest::new("Per", Relation::FamilyGroom).with_special_needs("Vegetar");
        let patch = GuestPatch {
            rsvp_status: Some(RsvpStatus::Coming),
            party_size: Some(2),
            ..Default::default()
        };
        patch.apply_to(&mut guest);

        assert_eq!(guest.rsvp_status, Some(RsvpStatus::Coming));
        assert_eq!(guest.party_size, Some(2));
        assert_eq!(guest.special_needs, "Vegetar");
        assert_eq!(guest.relation, Some(Relation::FamilyGroom));
    }

    #[test]
    fn test_serialization_uses_labels() {
        let guest = Guest::new("Per", Relation::FamilyGroom);
        let json = serde_json::to_string(&guest).unwrap();
        assert!(json.contains("Familie brudgom"));
        assert!(json.contains("Venter på svar"));
        let back: Guest = serde_json::from_str(&json).unwrap();
        assert_eq!(guest, back);
    }
}

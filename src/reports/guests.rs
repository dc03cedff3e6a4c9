//! Guest statistics
//!
//! RSVP headcounts, filtering and the figures shown for a filtered
//! selection. Every function takes any iterator over guests so it works on
//! a whole table as well as on a filtered slice.

use crate::models::{Guest, Relation, RsvpStatus};

/// Headcount per RSVP status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpCounts {
    pub coming: u64,
    pub not_coming: u64,
    pub pending: u64,
}

impl RsvpCounts {
    /// Headcount for one status
    pub fn get(&self, status: RsvpStatus) -> u64 {
        match status {
            RsvpStatus::Coming => self.coming,
            RsvpStatus::NotComing => self.not_coming,
            RsvpStatus::Pending => self.pending,
        }
    }

    /// Sum over all three statuses
    pub fn total(&self) -> u64 {
        self.coming + self.not_coming + self.pending
    }
}

/// Sum party sizes grouped by RSVP status
///
/// Guests without a status are not counted under any of them.
pub fn rsvp_counts<'a, I>(guests: I) -> RsvpCounts
where
    I: IntoIterator<Item = &'a Guest>,
{
    let mut counts = RsvpCounts::default();
    for guest in guests {
        match guest.rsvp_status {
            Some(RsvpStatus::Coming) => counts.coming += guest.headcount(),
            Some(RsvpStatus::NotComing) => counts.not_coming += guest.headcount(),
            Some(RsvpStatus::Pending) => counts.pending += guest.headcount(),
            None => {}
        }
    }
    counts
}

/// Sum of party sizes across all guests
pub fn total_invited<'a, I>(guests: I) -> u64
where
    I: IntoIterator<Item = &'a Guest>,
{
    guests.into_iter().map(Guest::headcount).sum()
}

/// Number of guests with special needs recorded
pub fn special_needs_count<'a, I>(guests: I) -> usize
where
    I: IntoIterator<Item = &'a Guest>,
{
    guests.into_iter().filter(|g| g.has_special_needs()).count()
}

/// Filter for the guest list; `None` means "all"
#[derive(Debug, Clone, Default)]
pub struct GuestFilter {
    pub status: Option<RsvpStatus>,
    pub relation: Option<Relation>,
    /// Case-insensitive substring of the name
    pub name_contains: Option<String>,
}

impl GuestFilter {
    /// Check if a guest passes every filter
    pub fn matches(&self, guest: &Guest) -> bool {
        if let Some(status) = self.status {
            if guest.rsvp_status != Some(status) {
                return false;
            }
        }

        if let Some(relation) = self.relation {
            if guest.relation != Some(relation) {
                return false;
            }
        }

        if let Some(ref needle) = self.name_contains {
            if !needle.is_empty() && !guest.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        true
    }

    /// Whether the filter lets every guest through
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.relation.is_none()
            && self.name_contains.as_deref().map_or(true, str::is_empty)
    }
}

/// Guests passing `filter`, in their original order
pub fn filter_guests<'a, I>(guests: I, filter: &GuestFilter) -> Vec<&'a Guest>
where
    I: IntoIterator<Item = &'a Guest>,
{
    guests.into_iter().filter(|g| filter.matches(g)).collect()
}

/// Figures shown below a filtered guest list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    pub rows: usize,
    pub people: u64,
    pub special_needs: usize,
}

impl SelectionStats {
    pub fn of(selection: &[&Guest]) -> Self {
        Self {
            rows: selection.len(),
            people: total_invited(selection.iter().copied()),
            special_needs: special_needs_count(selection.iter().copied()),
        }
    }
}

/// One slice of the RSVP chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: u64,
}

/// Slices of the RSVP pie chart; empty when nobody is invited
pub fn rsvp_chart<'a, I>(guests: I) -> Vec<ChartSlice>
where
    I: IntoIterator<Item = &'a Guest> + Clone,
{
    if total_invited(guests.clone()) == 0 {
        return Vec::new();
    }

    let counts = rsvp_counts(guests);
    [RsvpStatus::Coming, RsvpStatus::NotComing, RsvpStatus::Pending]
        .into_iter()
        .map(|status| ChartSlice {
            label: status.label(),
            value: counts.get(status),
        })
        .collect()
}

//! Strongly-typed surrogate ids for session records
//!
//! Rows shift when a record is removed, so callers hold on to these ids
//! instead of table indices. Ids live only as long as the session; they are
//! not written to the workbook.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Try to parse the full UUID
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                // Try stripping common prefixes
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(GuestId, "gst-");
define_id!(BudgetLineId, "bud-");
define_id!(TaskId, "tsk-");
define_id!(ScheduleEntryId, "sch-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_id_display() {
        let id = GuestId::new();
        let display = id.to_string();
        assert!(display.starts_with("gst-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(BudgetLineId::new(), BudgetLineId::new());
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain: GuestId = uuid_str.parse().unwrap();
        let prefixed: GuestId = format!("gst-{}", uuid_str).parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_short_display_is_not_parseable() {
        let id = TaskId::new();
        assert!(id.to_string().parse::<TaskId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = ScheduleEntryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ScheduleEntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

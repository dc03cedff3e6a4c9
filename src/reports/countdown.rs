//! Countdown to the wedding day

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{PlannerError, PlannerResult};

/// Month and day of the wedding, repeating every year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDate {
    month: u32,
    day: u32,
}

impl Default for EventDate {
    fn default() -> Self {
        Self { month: 5, day: 31 }
    }
}

impl EventDate {
    /// Create an event date; the day must exist in at least one year
    pub fn new(month: u32, day: u32) -> PlannerResult<Self> {
        // 2024 is a leap year, so 29 February passes
        if NaiveDate::from_ymd_opt(2024, month, day).is_none() {
            return Err(PlannerError::Config(format!(
                "Invalid wedding date: day {} of month {}",
                day, month
            )));
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The first occurrence on or after `today`
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let mut year = today.year();
        loop {
            if let Some(date) = NaiveDate::from_ymd_opt(year, self.month, self.day) {
                if date >= today {
                    return date;
                }
            }
            year += 1;
        }
    }

    /// Days from `today` until the next occurrence; 0 on the day itself
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MONTHS: [&str; 12] = [
            "januar", "februar", "mars", "april", "mai", "juni", "juli", "august", "september",
            "oktober", "november", "desember",
        ];
        let month = MONTHS
            .get(self.month as usize - 1)
            .copied()
            .unwrap_or("?");
        write!(f, "{}. {}", self.day, month)
    }
}

/// Days until the wedding as seen from `today`
pub fn days_until_event(today: NaiveDate, event: EventDate) -> i64 {
    event.days_until(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_before_event_uses_this_year() {
        assert_eq!(days_until_event(date(2026, 5, 1), EventDate::default()), 30);
    }

    #[test]
    fn test_on_event_day() {
        assert_eq!(days_until_event(date(2026, 5, 31), EventDate::default()), 0);
    }

    #[test]
    fn test_after_event_uses_next_year() {
        let event = EventDate::default();
        assert_eq!(event.next_occurrence(date(2026, 6, 1)), date(2027, 5, 31));
        assert_eq!(days_until_event(date(2026, 6, 1), event), 364);
    }

    #[test]
    fn test_leap_day_skips_to_next_leap_year() {
        let event = EventDate::new(2, 29).unwrap();
        assert_eq!(event.next_occurrence(date(2025, 3, 1)), date(2028, 2, 29));
    }

    #[test]
    fn test_invalid_date() {
        assert!(EventDate::new(2, 30).is_err());
        assert!(EventDate::new(13, 1).is_err());
        assert!(EventDate::new(0, 1).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(EventDate::default().to_string(), "31. mai");
    }
}

//! Birthday report for the upcoming window.
//!
//! Finds the birthdays that fall inside a window starting today and groups
//! the names by the date they land on, labelled with its weekday.

use crate::config::DEFAULT_UPCOMING_DAYS;
use crate::domain::ContactName;
use crate::models::BirthdayEntry;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Names whose birthday falls on one date of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingDay {
    pub date: NaiveDate,
    pub names: Vec<ContactName>,
}

impl UpcomingDay {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// Upcoming birthdays grouped by occurrence date.
///
/// Days are ordered chronologically starting from the reference date, and
/// only dates with at least one birthday are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    days: Vec<UpcomingDay>,
    window_days: u32,
}

impl UpcomingBirthdays {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[UpcomingDay] {
        &self.days
    }

    /// Names celebrating on the first `weekday` of the window, if any.
    pub fn on(&self, weekday: Weekday) -> Option<&[ContactName]> {
        self.days
            .iter()
            .find(|d| d.weekday() == weekday)
            .map(|d| d.names.as_slice())
    }

    /// Names celebrating on `date`, if any.
    pub fn on_date(&self, date: NaiveDate) -> Option<&[ContactName]> {
        self.days
            .iter()
            .find(|d| d.date == date)
            .map(|d| d.names.as_slice())
    }

    // entries arrive sorted by date
    fn push(&mut self, date: NaiveDate, name: ContactName) {
        match self.days.last_mut() {
            Some(day) if day.date == date => day.names.push(name),
            _ => self.days.push(UpcomingDay {
                date,
                names: vec![name],
            }),
        }
    }
}

impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // past one week a weekday no longer names a single date
        let with_dates = self.window_days > DEFAULT_UPCOMING_DAYS;
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let names: Vec<&str> = day.names.iter().map(ContactName::as_str).collect();
            if with_dates {
                write!(f, "{}: {}", day.date.format("%A %Y-%m-%d"), names.join(", "))?;
            } else {
                write!(f, "{}: {}", day.date.format("%A"), names.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Group the birthdays that fall within `window_days` of `today`.
///
/// An entry is included when its next occurrence is `0..window_days` days
/// away; the upper bound is exclusive.
pub fn upcoming_birthdays(
    entries: &[BirthdayEntry],
    today: NaiveDate,
    window_days: u32,
) -> UpcomingBirthdays {
    let mut hits: Vec<(NaiveDate, &BirthdayEntry)> = entries
        .iter()
        .filter_map(|entry| {
            let next = entry.birthday.next_occurrence(today)?;
            let delta = (next - today).num_days();
            (delta < i64::from(window_days)).then_some((next, entry))
        })
        .collect();

    // stable, so entries sharing a date keep store order
    hits.sort_by_key(|(date, _)| *date);

    let mut upcoming = UpcomingBirthdays {
        days: Vec::new(),
        window_days,
    };
    for (date, entry) in hits {
        upcoming.push(date, entry.name.clone());
    }
    upcoming
}

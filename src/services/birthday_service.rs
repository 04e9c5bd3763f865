//! Birthday service layer.
//!
//! Business logic for registering birthdays and reporting the ones coming
//! up in the next few days.

use super::upcoming::{upcoming_birthdays, UpcomingBirthdays};
use crate::config::DEFAULT_UPCOMING_DAYS;
use crate::domain::{BirthDate, ContactName};
use crate::error::AssistantResult;
use crate::models::BirthdayEntry;
use crate::repositories::BirthdayRepository;
use chrono::NaiveDate;

/// Birthday service trait for business operations.
pub trait BirthdayService {
    /// Register a birthday given as `YYYY-MM-DD`.
    ///
    /// Returns `true` if the name was not registered before.
    fn add(&mut self, name: &str, date: &str) -> AssistantResult<bool>;

    /// Look up the birthday registered under `name`.
    fn find(&self, name: &str) -> Option<BirthdayEntry>;

    /// Birthdays falling inside the upcoming window that starts at `today`.
    fn upcoming(&self, today: NaiveDate) -> UpcomingBirthdays;

    /// Length of the upcoming window in days.
    fn window_days(&self) -> u32;
}

/// Default implementation of BirthdayService.
pub struct BirthdayServiceImpl {
    repository: Box<dyn BirthdayRepository>,
    window_days: u32,
}

impl BirthdayServiceImpl {
    /// Create a new birthday service with the default seven day window.
    pub fn new(repository: Box<dyn BirthdayRepository>) -> Self {
        Self::with_window(repository, DEFAULT_UPCOMING_DAYS)
    }

    /// Create a new birthday service with a custom window length.
    pub fn with_window(repository: Box<dyn BirthdayRepository>, window_days: u32) -> Self {
        Self {
            repository,
            window_days,
        }
    }
}

impl BirthdayService for BirthdayServiceImpl {
    fn add(&mut self, name: &str, date: &str) -> AssistantResult<bool> {
        let name = ContactName::new(name)?;
        let birthday = BirthDate::parse(date)?;

        let created = self.repository.save(BirthdayEntry::new(name.clone(), birthday));
        tracing::debug!(name = %name, birthday = %birthday, created = created, "Birthday saved");
        Ok(created)
    }

    fn find(&self, name: &str) -> Option<BirthdayEntry> {
        self.repository.find(name)
    }

    fn upcoming(&self, today: NaiveDate) -> UpcomingBirthdays {
        let entries = self.repository.list();
        let upcoming = upcoming_birthdays(&entries, today, self.window_days);
        tracing::debug!(
            scanned = entries.len(),
            days = upcoming.days().len(),
            "Upcoming birthdays computed"
        );
        upcoming
    }

    fn window_days(&self) -> u32 {
        self.window_days
    }
}

//! Command handlers for the assistant bot.
//!
//! `AssistantBot` owns the contact and birthday services and turns each
//! parsed command into a reply. Errors never escape a handler: every
//! failure is rendered as a message and the session goes on.

use super::parser::{parse_input, Command};
use crate::config::DEFAULT_UPCOMING_DAYS;
use crate::domain::ValidationError;
use crate::error::{AssistantError, AssistantResult};
use crate::metrics::Metrics;
use crate::repositories::{InMemoryBirthdayRepository, InMemoryContactRepository};
use crate::services::{BirthdayService, BirthdayServiceImpl, ContactService, ContactServiceImpl};
use chrono::{Local, NaiveDate};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Goodbye!";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const NEED_NAME_AND_PHONE: &str = "Give me name and phone please.";
pub const NEED_NAME_AND_BIRTHDAY: &str = "Give me name and birthday (YYYY-MM-DD) please.";
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const PHONE_NOT_FOUND: &str = "Phone not found.";
pub const USER_NOT_FOUND: &str = "User not found.";
pub const NO_CONTACTS: &str = "No contacts found.";

/// Outcome of handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Continue(String),
    /// Print the message and end the session.
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Reply::Continue(msg) | Reply::Exit(msg) => msg,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

type Clock = Box<dyn Fn() -> NaiveDate>;

/// The assistant: services plus the glue that maps commands onto them.
pub struct AssistantBot {
    contacts: Box<dyn ContactService>,
    birthdays: Box<dyn BirthdayService>,
    metrics: Metrics,
    today: Clock,
}

impl AssistantBot {
    /// Create a bot over the given services, using the local date as today.
    pub fn new(contacts: Box<dyn ContactService>, birthdays: Box<dyn BirthdayService>) -> Self {
        Self {
            contacts,
            birthdays,
            metrics: Metrics::new(),
            today: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Create a bot backed by empty in-memory stores.
    pub fn in_memory(upcoming_days: u32) -> Self {
        Self::new(
            Box::new(ContactServiceImpl::new(Box::new(
                InMemoryContactRepository::new(),
            ))),
            Box::new(BirthdayServiceImpl::with_window(
                Box::new(InMemoryBirthdayRepository::new()),
                upcoming_days,
            )),
        )
    }

    /// Replace the source of today's date.
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    /// Share a metrics collector with the caller.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Parse and handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        self.handle(parse_input(line))
    }

    /// Handle a parsed command.
    pub fn handle(&mut self, command: Command) -> Reply {
        self.metrics.record_command();
        tracing::debug!(command = ?command, "Handling command");

        let outcome = match command {
            Command::Exit => return Reply::Exit(FAREWELL.to_string()),
            Command::Invalid => {
                self.metrics.record_invalid_command();
                tracing::warn!("Unrecognised command");
                return Reply::Continue(INVALID_COMMAND.to_string());
            }
            Command::Hello => Ok(GREETING.to_string()),
            Command::Add { name, phone } => self.add_contact(&name, &phone),
            Command::Change { name, phone } => self.change_contact(&name, &phone),
            Command::Phone { name } => self.show_phone(&name),
            Command::All => Ok(self.show_all()),
            Command::Delete { name } => self.delete_contact(&name),
            Command::EditPhone { name, old, new } => self.edit_phone(&name, &old, &new),
            Command::RemovePhone { name, phone } => self.remove_phone(&name, &phone),
            Command::AddBirthday { name, date } => self.add_birthday(&name, &date),
            Command::ShowBirthday { name } => self.show_birthday(&name),
            Command::Birthdays => Ok(self.show_upcoming()),
        };

        match outcome {
            Ok(message) => Reply::Continue(message),
            Err(err) => {
                self.metrics.record_failed_command();
                if err.is_not_found() {
                    tracing::debug!(error = %err, "Lookup failed");
                } else {
                    tracing::warn!(error = %err, "Rejected input");
                }
                Reply::Continue(render_error(&err).to_string())
            }
        }
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> AssistantResult<String> {
        if self.contacts.add(name, phone)? {
            self.metrics.record_contact_added();
            Ok("Contact added.".to_string())
        } else {
            Ok("Contact updated.".to_string())
        }
    }

    fn change_contact(&mut self, name: &str, phone: &str) -> AssistantResult<String> {
        self.contacts.update(name, phone)?;
        Ok("Contact updated.".to_string())
    }

    fn show_phone(&self, name: &str) -> AssistantResult<String> {
        let contact = self
            .contacts
            .find(name)
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))?;
        Ok(format!(
            "Phone number for {}: {}",
            contact.name(),
            contact.phones_display()
        ))
    }

    fn show_all(&self) -> String {
        let contacts = self.contacts.list();
        if contacts.is_empty() {
            return NO_CONTACTS.to_string();
        }
        contacts
            .iter()
            .map(|c| format!("{}: {}", c.name(), c.phones_display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> AssistantResult<String> {
        self.contacts.delete(name)?;
        Ok("Contact deleted.".to_string())
    }

    fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> AssistantResult<String> {
        self.contacts.edit_phone(name, old, new)?;
        Ok("Phone updated.".to_string())
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> AssistantResult<String> {
        self.contacts.remove_phone(name, phone)?;
        Ok("Phone removed.".to_string())
    }

    fn add_birthday(&mut self, name: &str, date: &str) -> AssistantResult<String> {
        if self.birthdays.add(name, date)? {
            self.metrics.record_birthday_added();
        }
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, name: &str) -> AssistantResult<String> {
        let entry = self
            .birthdays
            .find(name)
            .ok_or_else(|| AssistantError::UserNotFound(name.to_string()))?;
        Ok(format!("{}'s birthday: {}", entry.name, entry.birthday))
    }

    fn show_upcoming(&self) -> String {
        let today = (self.today)();
        let upcoming = self.birthdays.upcoming(today);
        let window = window_phrase(self.birthdays.window_days());
        if upcoming.is_empty() {
            format!("No birthdays in {}.", window)
        } else {
            format!("{}\nBirthdays for {} displayed.", upcoming, window)
        }
    }
}

fn window_phrase(days: u32) -> String {
    match days {
        1 => "the next day".to_string(),
        DEFAULT_UPCOMING_DAYS => "the next week".to_string(),
        n => format!("the next {} days", n),
    }
}

/// User-facing message for a failed command.
pub fn render_error(err: &AssistantError) -> &'static str {
    match err {
        AssistantError::Validation(ValidationError::InvalidDate(_)) => NEED_NAME_AND_BIRTHDAY,
        AssistantError::Validation(_) => NEED_NAME_AND_PHONE,
        AssistantError::ContactNotFound(_) => CONTACT_NOT_FOUND,
        AssistantError::PhoneNotFound { .. } => PHONE_NOT_FOUND,
        AssistantError::UserNotFound(_) => USER_NOT_FOUND,
    }
}

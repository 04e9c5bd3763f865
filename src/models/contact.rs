//! Contact record: a name and the phone numbers filed under it.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{AssistantError, AssistantResult};
use serde::Serialize;
use std::fmt;

/// A contact in the directory.
///
/// The name is fixed at construction. Every phone on the record has passed
/// [`PhoneNumber`] validation and no number is stored twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl Contact {
    /// Create a contact with no phone numbers.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// Create a contact holding a single phone number.
    pub fn with_phone(name: ContactName, phone: PhoneNumber) -> Self {
        Self {
            name,
            phones: vec![phone],
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Phones joined with `"; "`, as shown to the user.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Append a phone number.
    ///
    /// Returns `Ok(false)` if the number was already on the record.
    pub fn add_phone(&mut self, phone: &str) -> AssistantResult<bool> {
        let phone = PhoneNumber::new(phone)?;
        if self.phones.contains(&phone) {
            return Ok(false);
        }
        self.phones.push(phone);
        Ok(true)
    }

    /// Replace every phone on the record with `phone`.
    pub fn replace_phones(&mut self, phone: PhoneNumber) {
        self.phones = vec![phone];
    }

    /// Remove a phone number. Returns whether anything was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        self.phones.len() != before
    }

    /// Swap `old` for `new`.
    ///
    /// `new` is validated before the record is touched, so a failed edit
    /// leaves the phone list exactly as it was.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AssistantResult<()> {
        let new = PhoneNumber::new(new)?;
        let position = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| AssistantError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            })?;

        if self.phones.contains(&new) {
            // already filed, drop the old number instead of duplicating
            self.phones.remove(position);
        } else {
            self.phones[position] = new;
        }
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}

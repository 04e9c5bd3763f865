use crate::models::{BirthdayEntry, Contact};

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage, keyed by contact name,
/// enabling different implementations (in-memory, mock).
pub trait ContactRepository {
    /// Retrieve a single contact by name.
    fn get(&self, name: &str) -> Option<Contact>;

    /// Retrieve every contact in insertion order.
    fn list(&self) -> Vec<Contact>;

    /// Insert or overwrite a contact.
    ///
    /// Returns `true` if no contact with this name existed before.
    /// Overwriting keeps the contact's original position.
    fn save(&mut self, contact: Contact) -> bool;

    /// Delete a contact, returning it if it existed.
    fn delete(&mut self, name: &str) -> Option<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Repository for managing birthdays.
pub trait BirthdayRepository {
    /// First entry registered under `name`.
    fn find(&self, name: &str) -> Option<BirthdayEntry>;

    /// Every entry in registration order.
    fn list(&self) -> Vec<BirthdayEntry>;

    /// Register a birthday, replacing the date of an existing entry in place.
    ///
    /// Returns `true` if the name was not registered before.
    fn save(&mut self, entry: BirthdayEntry) -> bool;
}

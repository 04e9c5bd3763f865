//! Birthday entry: who was born when.

use crate::domain::{BirthDate, ContactName};
use serde::{Deserialize, Serialize};

/// A registered birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayEntry {
    pub name: ContactName,
    pub birthday: BirthDate,
}

impl BirthdayEntry {
    pub fn new(name: ContactName, birthday: BirthDate) -> Self {
        Self { name, birthday }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_entry_round_trips_json() {
        let entry = BirthdayEntry::new(
            ContactName::new("Alice").unwrap(),
            BirthDate::parse("1990-05-17").unwrap(),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Alice","birthday":"1990-05-17"}"#);

        let back: BirthdayEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}

use crate::models::BirthdayEntry;
use crate::repositories::traits::BirthdayRepository;

/// Birthday repository held entirely in memory, in registration order.
#[derive(Debug, Default)]
pub struct InMemoryBirthdayRepository {
    entries: Vec<BirthdayEntry>,
}

impl InMemoryBirthdayRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BirthdayRepository for InMemoryBirthdayRepository {
    fn find(&self, name: &str) -> Option<BirthdayEntry> {
        self.entries
            .iter()
            .find(|e| e.name.as_str() == name)
            .cloned()
    }

    fn list(&self) -> Vec<BirthdayEntry> {
        self.entries.clone()
    }

    fn save(&mut self, entry: BirthdayEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                existing.birthday = entry.birthday;
                false
            }
            None => {
                self.entries.push(entry);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BirthDate, ContactName};

    fn entry(name: &str, date: &str) -> BirthdayEntry {
        BirthdayEntry::new(ContactName::new(name).unwrap(), BirthDate::parse(date).unwrap())
    }

    #[test]
    fn test_save_and_find() {
        let mut repo = InMemoryBirthdayRepository::new();
        assert!(repo.save(entry("Alice", "1990-05-17")));

        let found = repo.find("Alice").unwrap();
        assert_eq!(found.birthday.to_string(), "1990-05-17");
        assert!(repo.find("Bob").is_none());
    }

    #[test]
    fn test_save_replaces_date_in_place() {
        let mut repo = InMemoryBirthdayRepository::new();
        repo.save(entry("Alice", "1990-05-17"));
        repo.save(entry("Bob", "1985-01-01"));

        assert!(!repo.save(entry("Alice", "1991-06-18")));

        let all = repo.list();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name.as_str(), "Alice");
        assert_eq!(all[0].birthday.to_string(), "1991-06-18");
    }
}

use assistant_bot::models::BirthdayEntry;
use assistant_bot::repositories::BirthdayRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock birthday repository for testing.
///
/// Entries can be seeded directly, including duplicate names, to exercise
/// first-match lookup.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBirthdayRepository {
    entries: Arc<Mutex<Vec<BirthdayEntry>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBirthdayRepository {
    /// Create a new empty MockBirthdayRepository.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed an entry as-is, bypassing the one-entry-per-name rule.
    pub fn push_entry(&self, entry: BirthdayEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockBirthdayRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BirthdayRepository for MockBirthdayRepository {
    fn find(&self, name: &str) -> Option<BirthdayEntry> {
        self.track_call("find");

        let entries = self.entries.lock().unwrap();
        entries.iter().find(|e| e.name.as_str() == name).cloned()
    }

    fn list(&self) -> Vec<BirthdayEntry> {
        self.track_call("list");
        self.entries.lock().unwrap().clone()
    }

    fn save(&mut self, entry: BirthdayEntry) -> bool {
        self.track_call("save");

        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                existing.birthday = entry.birthday;
                false
            }
            None => {
                entries.push(entry);
                true
            }
        }
    }
}

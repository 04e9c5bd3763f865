use assistant_bot::models::Contact;
use assistant_bot::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Stores contacts in memory, shares its state between clones so a test can
/// keep a handle after boxing it into a service, and tracks method calls
/// for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a contact without counting a call.
    pub fn add_contact(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Snapshot of the stored contacts without counting a call.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
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

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn get(&self, name: &str) -> Option<Contact> {
        self.track_call("get");

        let contacts = self.contacts.lock().unwrap();
        contacts.iter().find(|c| c.name().as_str() == name).cloned()
    }

    fn list(&self) -> Vec<Contact> {
        self.track_call("list");
        self.contacts.lock().unwrap().clone()
    }

    fn save(&mut self, contact: Contact) -> bool {
        self.track_call("save");

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.iter_mut().find(|c| c.name() == contact.name()) {
            Some(existing) => {
                *existing = contact;
                false
            }
            None => {
                contacts.push(contact);
                true
            }
        }
    }

    fn delete(&mut self, name: &str) -> Option<Contact> {
        self.track_call("delete");

        let mut contacts = self.contacts.lock().unwrap();
        let position = contacts.iter().position(|c| c.name().as_str() == name)?;
        Some(contacts.remove(position))
    }

    fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }
}

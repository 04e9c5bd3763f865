use crate::models::Contact;
use crate::repositories::traits::ContactRepository;

/// Contact repository held entirely in memory.
///
/// Contacts live in a vector so listing follows insertion order. Lookups
/// are linear scans, which is fine for a personal address book.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name().as_str() == name)
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn get(&self, name: &str) -> Option<Contact> {
        self.position(name).map(|i| self.contacts[i].clone())
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn save(&mut self, contact: Contact) -> bool {
        match self.position(contact.name().as_str()) {
            Some(i) => {
                self.contacts[i] = contact;
                false
            }
            None => {
                self.contacts.push(contact);
                true
            }
        }
    }

    fn delete(&mut self, name: &str) -> Option<Contact> {
        self.position(name).map(|i| self.contacts.remove(i))
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

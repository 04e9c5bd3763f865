//! Contact service layer.
//!
//! Business logic for the contact directory: adding, updating, listing and
//! deleting contacts, and managing the phones on a contact.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{AssistantError, AssistantResult};
use crate::models::Contact;
use crate::repositories::ContactRepository;

/// Contact service trait for directory operations.
pub trait ContactService {
    /// Create or overwrite a contact so that it holds exactly `phone`.
    ///
    /// Returns `true` when a new contact was created.
    fn add(&mut self, name: &str, phone: &str) -> AssistantResult<bool>;

    /// Replace the phones of an existing contact with `phone`.
    fn update(&mut self, name: &str, phone: &str) -> AssistantResult<()>;

    /// Look up a contact by name.
    fn find(&self, name: &str) -> Option<Contact>;

    /// All contacts in insertion order.
    fn list(&self) -> Vec<Contact>;

    /// Remove a contact.
    fn delete(&mut self, name: &str) -> AssistantResult<Contact>;

    /// Append a phone to an existing contact.
    fn add_phone(&mut self, name: &str, phone: &str) -> AssistantResult<bool>;

    /// Swap one phone of an existing contact for another.
    fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> AssistantResult<()>;

    /// Remove one phone from an existing contact.
    fn remove_phone(&mut self, name: &str, phone: &str) -> AssistantResult<()>;

    /// Look up a phone on an existing contact.
    fn find_phone(&self, name: &str, phone: &str) -> AssistantResult<Option<PhoneNumber>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Box<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Box<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    fn require(&self, name: &str) -> AssistantResult<Contact> {
        self.repository
            .get(name)
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
    }
}

impl ContactService for ContactServiceImpl {
    fn add(&mut self, name: &str, phone: &str) -> AssistantResult<bool> {
        let name = ContactName::new(name)?;
        let phone = PhoneNumber::new(phone)?;

        let created = self.repository.save(Contact::with_phone(name.clone(), phone));
        tracing::debug!(name = %name, created = created, "Contact saved");
        Ok(created)
    }

    fn update(&mut self, name: &str, phone: &str) -> AssistantResult<()> {
        let mut contact = self.require(name)?;
        let phone = PhoneNumber::new(phone)?;

        contact.replace_phones(phone);
        self.repository.save(contact);
        tracing::debug!(name = %name, "Contact updated");
        Ok(())
    }

    fn find(&self, name: &str) -> Option<Contact> {
        self.repository.get(name)
    }

    fn list(&self) -> Vec<Contact> {
        self.repository.list()
    }

    fn delete(&mut self, name: &str) -> AssistantResult<Contact> {
        let removed = self
            .repository
            .delete(name)
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))?;
        tracing::debug!(name = %name, "Contact deleted");
        Ok(removed)
    }

    fn add_phone(&mut self, name: &str, phone: &str) -> AssistantResult<bool> {
        let mut contact = self.require(name)?;
        let added = contact.add_phone(phone)?;
        if added {
            self.repository.save(contact);
        }
        Ok(added)
    }

    fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> AssistantResult<()> {
        let mut contact = self.require(name)?;
        contact.edit_phone(old, new)?;
        self.repository.save(contact);
        Ok(())
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> AssistantResult<()> {
        let mut contact = self.require(name)?;
        if !contact.remove_phone(phone) {
            return Err(AssistantError::PhoneNotFound {
                name: name.to_string(),
                phone: phone.to_string(),
            });
        }
        self.repository.save(contact);
        Ok(())
    }

    fn find_phone(&self, name: &str, phone: &str) -> AssistantResult<Option<PhoneNumber>> {
        let contact = self.require(name)?;
        Ok(contact.find_phone(phone).cloned())
    }
}

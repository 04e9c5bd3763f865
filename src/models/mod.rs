//! Data models for the contact directory and the birthday store.
//!
//! This module contains the record structures built on top of the domain
//! value objects: a contact with its phone list, and a birthday entry.

pub mod birthday;
pub mod contact;

pub use birthday::BirthdayEntry;
pub use contact::Contact;

//! Application service layer.
//!
//! Services contain the business rules of the assistant and sit between
//! the command handlers and the repositories.

mod birthday_service;
mod contact_service;
mod upcoming;

pub use birthday_service::{BirthdayService, BirthdayServiceImpl};
pub use contact_service::{ContactService, ContactServiceImpl};
pub use upcoming::{upcoming_birthdays, UpcomingBirthdays, UpcomingDay};

// Re-export common types used by services
pub use crate::models::{BirthdayEntry, Contact};

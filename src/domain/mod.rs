//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names, phone
//! numbers and birth dates. These value objects validate at construction
//! time and prevent invalid data from being represented in the system.

pub mod birth_date;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birth_date::{BirthDate, DATE_FORMAT};
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;

mod in_memory_birthday_repository;
mod in_memory_contact_repository;
mod traits;

pub use in_memory_birthday_repository::InMemoryBirthdayRepository;
pub use in_memory_contact_repository::InMemoryContactRepository;
pub use traits::{BirthdayRepository, ContactRepository};

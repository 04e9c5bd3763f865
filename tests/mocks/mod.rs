mod mock_birthday_repository;
mod mock_contact_repository;

pub use mock_birthday_repository::MockBirthdayRepository;
pub use mock_contact_repository::MockContactRepository;

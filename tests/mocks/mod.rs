pub mod mock_contact_message_repository;
pub mod mock_user_repository;

#[allow(unused_imports)]
pub use mock_contact_message_repository::MockContactMessageRepository;
#[allow(unused_imports)]
pub use mock_user_repository::MockUserRepository;

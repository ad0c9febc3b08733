mod in_memory_contact_repository;
mod in_memory_user_repository;
mod traits;

pub use in_memory_contact_repository::InMemoryContactMessageRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use traits::{ContactMessageRepository, UserRepository};

//! User infrastructure - hashing, persistence, and the user service

pub mod password;
pub mod postgres_repository;
pub mod repository;
pub mod service;

pub use password::Argon2Hasher;
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::UserService;

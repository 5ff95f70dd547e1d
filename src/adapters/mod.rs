//! Adapters implementing domain ports.

pub mod in_memory_repository;
pub mod json_repository;

pub use in_memory_repository::InMemoryRepository;
pub use json_repository::JsonGameRepository;

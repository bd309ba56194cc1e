//! Account store implementations
//!
//! The in-memory store stands in for the host user-management subsystem:
//! it hashes passwords with Argon2, applies edit sets and keeps names unique.

mod in_memory;
mod password;

pub use in_memory::InMemoryAccountStore;
pub use password::{Argon2Hasher, PasswordHasher};

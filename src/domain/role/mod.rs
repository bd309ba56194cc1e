//! Role domain - the roles an account may be granted

mod entity;
mod repository;

pub use entity::{Role, RoleId};
pub use repository::RoleRegistry;

#[cfg(test)]
pub use repository::MockRoleRegistry;

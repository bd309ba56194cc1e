//! Session infrastructure module
//!
//! Bearer tokens are signed JWTs whose subject is the account id;
//! capabilities come from a role grant table.

mod grants;
mod jwt;
mod service;

pub use grants::GrantTable;
pub use jwt::{JwtClaims, JwtConfig, JwtService};
pub use service::JwtSessionService;

//! API middleware components

pub mod logging;
pub mod security;
pub mod session;

pub use logging::logging_middleware;
pub use security::{security_headers_middleware, MAX_BODY_SIZE};
pub use session::{extract_bearer_token, CurrentSession};

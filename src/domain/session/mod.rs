//! Session domain - who is calling and what they may do

mod capability;
mod service;

pub use capability::Capability;
pub use service::{Session, SessionService};

//! Platform API access.
//!
//! Commands consume the repository traits; the HTTP implementations here are
//! what the binary wires in.

pub mod client;
pub mod users;

pub use client::ApiClient;
pub use users::{HttpUserRepository, UserRepository};

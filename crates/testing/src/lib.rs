//! Testing utilities for the PaaS CLI
//!
//! This crate provides:
//! - Recording fakes for the UI, the user repository and requirements
//! - Fixtures for configurations and users
//! - Proptest strategies for command-line input
//!
//! # Examples
//!
//! ```
//! use paas_testing::{fixtures::*, mocks::*};
//!
//! let ui = FakeUi::with_inputs(&["yes"]);
//! let repo = FakeUserRepository::new().with_user(create_test_user("my-user", "my-user-guid"));
//! let config = create_test_config();
//! assert_eq!(config.current_user(), "current-user");
//! ```

pub mod fixtures;
pub mod mocks;
pub mod strategies;

// Re-export commonly used types
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use proptest;

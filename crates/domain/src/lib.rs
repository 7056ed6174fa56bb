//! PaaS CLI Domain Types
//!
//! Passive value types shared by the command-line client and its API
//! repositories, plus the error type every remote call reports.
//!
//! ## Usage
//!
//! ```rust
//! use paas_domain::{ApiError, UserFields};
//!
//! let user = UserFields::new("my-user", "my-user-guid");
//! assert_eq!(user.guid, "my-user-guid");
//!
//! let err = ApiError::http(404, Some("UserNotFound"), "User not found");
//! assert!(err.is_not_found());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod user;

pub use errors::{ApiError, ApiResult};
pub use user::{OrganizationFields, SpaceFields, UserFields};

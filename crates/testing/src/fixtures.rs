//! Test fixtures.

use paas_cli::config::Config;
use paas_domain::{OrganizationFields, SpaceFields, UserFields};

/// Configuration of a logged-in `current-user` targeting `my-org`/`my-space`
pub fn create_test_config() -> Config {
    Config {
        access_token: Some("test-access-token".to_string()),
        username: Some("current-user".to_string()),
        organization: Some(OrganizationFields {
            name: "my-org".to_string(),
            guid: "my-org-guid".to_string(),
        }),
        space: Some(SpaceFields {
            name: "my-space".to_string(),
            guid: "my-space-guid".to_string(),
        }),
        ..Config::default()
    }
}

/// Configuration without a session
pub fn create_logged_out_config() -> Config {
    Config {
        access_token: None,
        ..create_test_config()
    }
}

pub fn create_test_user(username: &str, guid: &str) -> UserFields {
    UserFields::new(username, guid)
}

/// Owned argument vector from string literals
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

//! Tests for the built-in requirements

use std::sync::Arc;

use paas_cli::requirements::{
    ApiRequirementFactory, ApiUserRequirement, LoginRequirement, Requirement,
    RequirementFactory, UserRequirement,
};
use paas_domain::ApiError;
use paas_testing::{
    create_logged_out_config, create_test_config, create_test_user, FakeUi, FakeUserRepository,
};

// ============================================================================
// LoginRequirement
// ============================================================================

#[test]
fn test_login_requirement_with_session() {
    let ui = Arc::new(FakeUi::new());
    let requirement = LoginRequirement::new(ui.clone(), Arc::new(create_test_config()));

    assert!(requirement.execute());
    assert!(ui.outputs().is_empty());
}

#[test]
fn test_login_requirement_without_session_reports_failure() {
    let ui = Arc::new(FakeUi::new());
    let requirement = LoginRequirement::new(ui.clone(), Arc::new(create_logged_out_config()));

    assert!(!requirement.execute());

    let failures = ui.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("Not logged in"));
}

// ============================================================================
// ApiUserRequirement
// ============================================================================

#[test]
fn test_user_requirement_resolves_user() {
    let ui = Arc::new(FakeUi::new());
    let user_repo = Arc::new(FakeUserRepository::new().with_user(create_test_user("my-user", "my-user-guid")));
    let requirement = ApiUserRequirement::new("my-user", ui.clone(), user_repo.clone());

    assert!(requirement.execute());
    assert_eq!(user_repo.find_by_username_calls(), vec!["my-user".to_string()]);

    let user = requirement.user().expect("user should be resolved");
    assert_eq!(user.username, "my-user");
    assert_eq!(user.guid, "my-user-guid");
    assert!(ui.outputs().is_empty());
}

#[test]
fn test_user_requirement_passes_when_user_does_not_exist() {
    let ui = Arc::new(FakeUi::new());
    let requirement = ApiUserRequirement::new("ghost", ui.clone(), Arc::new(FakeUserRepository::new()));

    assert!(requirement.execute());
    assert!(requirement.user().is_none());
    assert!(ui.failures().is_empty());
}

#[test]
fn test_user_requirement_reports_lookup_error() {
    let ui = Arc::new(FakeUi::new());
    let user_repo = FakeUserRepository::new()
        .with_find_error(ApiError::Transport("connection refused".to_string()));
    let requirement = ApiUserRequirement::new("my-user", ui.clone(), Arc::new(user_repo));

    assert!(!requirement.execute());

    let failures = ui.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("connection refused"));
}

#[test]
#[should_panic(expected = "read before it was executed")]
fn test_user_requirement_read_before_execute() {
    let requirement = ApiUserRequirement::new(
        "my-user",
        Arc::new(FakeUi::new()),
        Arc::new(FakeUserRepository::new().with_user(create_test_user("my-user", "guid"))),
    );

    let _ = requirement.user();
}

#[test]
#[should_panic(expected = "read before it was executed")]
fn test_user_requirement_read_after_failed_execute() {
    let user_repo = FakeUserRepository::new().with_find_error(ApiError::http(500, None, "boom"));
    let requirement =
        ApiUserRequirement::new("my-user", Arc::new(FakeUi::new()), Arc::new(user_repo));

    assert!(!requirement.execute());
    let _ = requirement.user();
}

// ============================================================================
// ApiRequirementFactory
// ============================================================================

#[test]
fn test_factory_builds_api_requirements() {
    let ui = Arc::new(FakeUi::new());
    let user_repo = Arc::new(FakeUserRepository::new().with_user(create_test_user("my-user", "g1")));
    let factory = ApiRequirementFactory::new(
        ui.clone(),
        Arc::new(create_logged_out_config()),
        user_repo.clone(),
    );

    let login = factory.login_requirement();
    assert_eq!(login.name(), "login");
    assert!(!login.execute());

    let user_req = factory.user_requirement("my-user");
    let as_requirement = user_req.clone().into_requirement();
    assert_eq!(as_requirement.name(), "user");
    assert!(as_requirement.execute());
    assert_eq!(user_req.user().map(|user| user.guid), Some("g1".to_string()));
}

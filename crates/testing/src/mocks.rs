//! Recording fakes for the CLI's collaborators.
//!
//! Each fake records the arguments it was called with and answers with a
//! canned result configured up front.

use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

use paas_cli::api::UserRepository;
use paas_cli::interactive::is_affirmative;
use paas_cli::requirements::{
    ApiUserRequirement, Requirement, RequirementFactory, UserRequirement,
};
use paas_cli::terminal::Ui;
use paas_domain::{ApiError, ApiResult, UserFields};

/// UI that records rendered lines and prompts and answers from queued inputs
#[derive(Default)]
pub struct FakeUi {
    inputs: RwLock<VecDeque<String>>,
    outputs: RwLock<Vec<String>>,
    prompts: RwLock<Vec<String>>,
    failures: RwLock<Vec<String>>,
    failed_with_usage: RwLock<bool>,
}

impl FakeUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// UI answering prompts with `inputs`, in order; an exhausted queue answers ""
    pub fn with_inputs(inputs: &[&str]) -> Self {
        let ui = Self::new();
        ui.inputs
            .write()
            .extend(inputs.iter().map(|input| input.to_string()));
        ui
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.read().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().clone()
    }

    /// Messages passed to `failed`
    pub fn failures(&self) -> Vec<String> {
        self.failures.read().clone()
    }

    pub fn failed_with_usage(&self) -> bool {
        *self.failed_with_usage.read()
    }
}

impl Ui for FakeUi {
    fn say(&self, message: &str) {
        self.outputs.write().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.outputs.write().push(message.to_string());
    }

    fn ok(&self) {
        self.outputs.write().push("OK".to_string());
    }

    fn failed(&self, message: &str) {
        self.failures.write().push(message.to_string());
        let mut outputs = self.outputs.write();
        outputs.push("FAILED".to_string());
        outputs.push(message.to_string());
    }

    fn failed_with_usage(&self, _usage: &str) {
        *self.failed_with_usage.write() = true;
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.write().push(prompt.to_string());
        let answer = self.inputs.write().pop_front().unwrap_or_default();
        is_affirmative(&answer)
    }
}

/// User repository with canned answers that records every call
pub struct FakeUserRepository {
    find_by_username_result: ApiResult<Option<UserFields>>,
    delete_result: ApiResult<()>,
    find_by_username_calls: RwLock<Vec<String>>,
    delete_calls: RwLock<Vec<String>>,
}

impl FakeUserRepository {
    /// Repository that knows no users and deletes successfully
    pub fn new() -> Self {
        Self {
            find_by_username_result: Ok(None),
            delete_result: Ok(()),
            find_by_username_calls: RwLock::new(Vec::new()),
            delete_calls: RwLock::new(Vec::new()),
        }
    }

    /// Every lookup resolves to `user`
    pub fn with_user(mut self, user: UserFields) -> Self {
        self.find_by_username_result = Ok(Some(user));
        self
    }

    /// Every lookup fails with `error`
    pub fn with_find_error(mut self, error: ApiError) -> Self {
        self.find_by_username_result = Err(error);
        self
    }

    /// Every delete fails with `error`
    pub fn with_delete_error(mut self, error: ApiError) -> Self {
        self.delete_result = Err(error);
        self
    }

    /// Usernames passed to `find_by_username`, in call order
    pub fn find_by_username_calls(&self) -> Vec<String> {
        self.find_by_username_calls.read().clone()
    }

    /// Guids passed to `delete`, in call order
    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.read().clone()
    }
}

impl Default for FakeUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for FakeUserRepository {
    fn find_by_username(&self, username: &str) -> ApiResult<Option<UserFields>> {
        self.find_by_username_calls.write().push(username.to_string());
        self.find_by_username_result.clone()
    }

    fn delete(&self, user_guid: &str) -> ApiResult<()> {
        self.delete_calls.write().push(user_guid.to_string());
        self.delete_result.clone()
    }
}

/// Requirement with a fixed outcome that counts its executions
pub struct FakeRequirement {
    name: &'static str,
    success: bool,
    ui: Arc<dyn Ui>,
    executions: RwLock<usize>,
}

impl FakeRequirement {
    pub fn new(name: &'static str, success: bool, ui: Arc<dyn Ui>) -> Self {
        Self {
            name,
            success,
            ui,
            executions: RwLock::new(0),
        }
    }

    pub fn executions(&self) -> usize {
        *self.executions.read()
    }
}

impl Requirement for FakeRequirement {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute(&self) -> bool {
        *self.executions.write() += 1;
        if !self.success {
            self.ui.failed(&format!("{} requirement not met", self.name));
        }
        self.success
    }
}

/// Factory with a configurable login outcome.
///
/// User requirements are the real [`ApiUserRequirement`] over the given
/// repository, so lookups show up in the repository's call log.
pub struct FakeRequirementFactory {
    pub login_success: bool,
    ui: Arc<dyn Ui>,
    user_repo: Arc<dyn UserRepository>,
}

impl FakeRequirementFactory {
    pub fn new(login_success: bool, ui: Arc<dyn Ui>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            login_success,
            ui,
            user_repo,
        }
    }
}

impl RequirementFactory for FakeRequirementFactory {
    fn login_requirement(&self) -> Arc<dyn Requirement> {
        Arc::new(FakeRequirement::new(
            "login",
            self.login_success,
            self.ui.clone(),
        ))
    }

    fn user_requirement(&self, username: &str) -> Arc<dyn UserRequirement> {
        Arc::new(ApiUserRequirement::new(
            username,
            self.ui.clone(),
            self.user_repo.clone(),
        ))
    }
}

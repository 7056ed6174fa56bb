//! Pre-conditions that gate command execution.
//!
//! A command declares an ordered list of requirements. The runner executes
//! them in order and stops at the first one that is unmet; the command's
//! action only runs when every requirement passed. A requirement reports its
//! own failure through the [`Ui`] before returning `false`, and never
//! mutates remote state.

mod login;
mod user;

pub use login::LoginRequirement;
pub use user::ApiUserRequirement;

use std::sync::Arc;

use crate::api::UserRepository;
use crate::config::Config;
use crate::terminal::Ui;
use paas_domain::UserFields;

/// A pre-condition of a command
pub trait Requirement: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Check the pre-condition, reporting to the user when it is unmet
    fn execute(&self) -> bool;
}

/// Requirement that resolves a user by name
pub trait UserRequirement: Requirement {
    /// The resolved user, `None` when the lookup found no such user.
    ///
    /// # Panics
    ///
    /// Panics when called before [`Requirement::execute`] returned `true`.
    fn user(&self) -> Option<UserFields>;

    /// View this requirement as a plain [`Requirement`] for the runner
    fn into_requirement(self: Arc<Self>) -> Arc<dyn Requirement>;
}

/// Builds the requirements commands declare
pub trait RequirementFactory {
    fn login_requirement(&self) -> Arc<dyn Requirement>;

    fn user_requirement(&self, username: &str) -> Arc<dyn UserRequirement>;
}

/// [`RequirementFactory`] producing requirements backed by the platform API
pub struct ApiRequirementFactory {
    ui: Arc<dyn Ui>,
    config: Arc<Config>,
    user_repo: Arc<dyn UserRepository>,
}

impl ApiRequirementFactory {
    pub fn new(ui: Arc<dyn Ui>, config: Arc<Config>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            ui,
            config,
            user_repo,
        }
    }
}

impl RequirementFactory for ApiRequirementFactory {
    fn login_requirement(&self) -> Arc<dyn Requirement> {
        Arc::new(LoginRequirement::new(self.ui.clone(), self.config.clone()))
    }

    fn user_requirement(&self, username: &str) -> Arc<dyn UserRequirement> {
        Arc::new(ApiUserRequirement::new(
            username,
            self.ui.clone(),
            self.user_repo.clone(),
        ))
    }
}

//! CLI commands
//!
//! Every command goes through [`run_command`]: usage check, requirements in
//! declaration order, then the command's action.

mod context;
pub mod delete_user;
mod runner;

pub use context::Context;
pub use delete_user::DeleteUserCommand;
pub use runner::{run_command, RunOutcome};

use std::sync::Arc;

use crate::api::UserRepository;
use crate::config::Config;
use crate::requirements::{Requirement, RequirementFactory};
use crate::terminal::Ui;
use paas_domain::ApiError;

/// Boolean option a command accepts
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub short: char,
    pub long: &'static str,
    pub help: &'static str,
}

/// Static description of a command
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub name: &'static str,
    pub short_name: Option<&'static str>,
    pub description: &'static str,
    pub usage: &'static str,
    pub flags: Vec<FlagSpec>,
}

impl CommandMetadata {
    /// Whether `name` is this command's name or alias
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.short_name == Some(name)
    }
}

/// Failure of a command's action, after it has been reported to the user
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0} ran before its requirements were resolved")]
    RequirementsNotResolved(&'static str),
}

/// A command whose action is gated by requirements
pub trait Command {
    fn metadata(&self) -> CommandMetadata;

    /// Whether the parsed invocation violates the command's usage
    fn usage_failed(&self, ctx: &Context) -> bool;

    /// Ordered pre-conditions of this invocation
    fn requirements(
        &mut self,
        ctx: &Context,
        factory: &dyn RequirementFactory,
    ) -> Vec<Arc<dyn Requirement>>;

    /// The command's action; only called once every requirement passed
    fn run(&mut self, ctx: &Context) -> Result<(), CommandError>;
}

/// Commands known to the binary, looked up by name or alias
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in command
    pub fn with_defaults(
        ui: Arc<dyn Ui>,
        config: Arc<Config>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DeleteUserCommand::new(ui, config, user_repo)));
        registry
    }

    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut dyn Command> {
        self.commands
            .iter_mut()
            .find(|command| command.metadata().answers_to(name))
            .map(|command| command.as_mut() as &mut dyn Command)
    }

    pub fn metadata(&self) -> Vec<CommandMetadata> {
        self.commands.iter().map(|command| command.metadata()).collect()
    }
}

//! `delete-user` command

use std::sync::Arc;

use super::{Command, CommandError, CommandMetadata, Context, FlagSpec};
use crate::api::UserRepository;
use crate::config::Config;
use crate::output::colors;
use crate::requirements::{Requirement, RequirementFactory, UserRequirement};
use crate::terminal::Ui;

const FORCE: &str = "force";

/// Deletes a user account after interactive confirmation.
///
/// A username the lookup does not know is not an error: the command reports
/// success and warns that the user does not exist, without calling delete.
pub struct DeleteUserCommand {
    ui: Arc<dyn Ui>,
    config: Arc<Config>,
    user_repo: Arc<dyn UserRepository>,
    user_req: Option<Arc<dyn UserRequirement>>,
}

impl DeleteUserCommand {
    pub fn new(ui: Arc<dyn Ui>, config: Arc<Config>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            ui,
            config,
            user_repo,
            user_req: None,
        }
    }
}

impl Command for DeleteUserCommand {
    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "delete-user",
            short_name: Some("du"),
            description: "Delete a user",
            usage: "paas delete-user USERNAME [-f]",
            flags: vec![FlagSpec {
                short: 'f',
                long: FORCE,
                help: "Force deletion without confirmation",
            }],
        }
    }

    fn usage_failed(&self, ctx: &Context) -> bool {
        ctx.args().len() != 1
    }

    fn requirements(
        &mut self,
        ctx: &Context,
        factory: &dyn RequirementFactory,
    ) -> Vec<Arc<dyn Requirement>> {
        let user_req = factory.user_requirement(&ctx.args()[0]);
        self.user_req = Some(user_req.clone());

        vec![factory.login_requirement(), user_req.into_requirement()]
    }

    fn run(&mut self, ctx: &Context) -> Result<(), CommandError> {
        let username = ctx.args()[0].as_str();
        let Some(user_req) = self.user_req.as_ref() else {
            let err = CommandError::RequirementsNotResolved("delete-user");
            self.ui.failed(&err.to_string());
            return Err(err);
        };

        if !ctx.bool(FORCE) {
            let prompt = format!("Really delete user {}?", colors::entity(username));
            if !self.ui.confirm(&prompt) {
                tracing::info!(username, "Deletion declined");
                return Ok(());
            }
        }

        self.ui.say(&format!(
            "Deleting user {} as {}...",
            colors::entity(username),
            colors::entity(self.config.current_user())
        ));

        let Some(user) = user_req.user() else {
            self.ui.ok();
            self.ui.warn(&format!("User {} does not exist.", username));
            return Ok(());
        };

        if let Err(err) = self.user_repo.delete(&user.guid) {
            self.ui.failed(&err.to_string());
            return Err(err.into());
        }

        self.ui.ok();
        Ok(())
    }
}

use super::{Command, Context};
use crate::requirements::RequirementFactory;
use crate::terminal::Ui;
use paas_common::{log_debug, log_warn};

/// How far an invocation got
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Arguments did not match the command's usage; nothing else ran
    UsageFailed,
    /// A requirement was unmet; later requirements and the action were skipped
    RequirementsFailed,
    /// Requirements passed but the action reported an error
    ActionFailed,
    /// The action ran to completion
    Completed,
}

impl RunOutcome {
    /// Whether every declared requirement passed
    pub fn requirements_passed(&self) -> bool {
        matches!(self, Self::ActionFailed | Self::Completed)
    }

    pub fn usage_failed(&self) -> bool {
        *self == Self::UsageFailed
    }

    pub fn is_success(&self) -> bool {
        *self == Self::Completed
    }
}

/// Run `command` with raw `args`.
///
/// Usage failures are reported through `ui`. Requirements and the action
/// report their own failures.
pub fn run_command(
    command: &mut dyn Command,
    args: &[String],
    ui: &dyn Ui,
    factory: &dyn RequirementFactory,
) -> RunOutcome {
    let metadata = command.metadata();

    let ctx = match Context::parse(&metadata, args) {
        Ok(ctx) => ctx,
        Err(err) => {
            log_debug!("Invocation rejected by parser", command = metadata.name, error = err.kind());
            ui.failed_with_usage(metadata.usage);
            return RunOutcome::UsageFailed;
        }
    };

    if command.usage_failed(&ctx) {
        log_debug!("Usage check failed", command = metadata.name, args = ctx.args());
        ui.failed_with_usage(metadata.usage);
        return RunOutcome::UsageFailed;
    }

    for requirement in command.requirements(&ctx, factory) {
        if !requirement.execute() {
            log_debug!("Requirement unmet", command = metadata.name, requirement = requirement.name());
            return RunOutcome::RequirementsFailed;
        }
        log_debug!("Requirement passed", command = metadata.name, requirement = requirement.name());
    }

    match command.run(&ctx) {
        Ok(()) => RunOutcome::Completed,
        Err(err) => {
            log_warn!("Command failed", command = metadata.name, error = err);
            RunOutcome::ActionFailed
        }
    }
}

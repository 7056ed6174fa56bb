//! Terminal user interface.
//!
//! Commands and requirements never print directly; they render through the
//! [`Ui`] trait so a recording implementation can stand in during tests.

use crate::interactive::{is_affirmative, prompt_line};
use crate::output::colors;

/// Rendering and input capability shared by commands and requirements
pub trait Ui: Send + Sync {
    /// Render one line of output
    fn say(&self, message: &str);

    /// Render a warning line
    fn warn(&self, message: &str);

    /// Render the success marker that ends a command
    fn ok(&self);

    /// Report a failure of the current invocation
    fn failed(&self, message: &str);

    /// Report that the invocation did not match the command's usage
    fn failed_with_usage(&self, usage: &str);

    /// Render `prompt`, read one line and tell whether it confirmed
    fn confirm(&self, prompt: &str) -> bool;
}

/// [`Ui`] backed by stdout and an interactive stdin prompt
#[derive(Debug, Default)]
pub struct TerminalUi;

impl TerminalUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for TerminalUi {
    fn say(&self, message: &str) {
        println!("{}", message);
    }

    fn warn(&self, message: &str) {
        println!("{}", colors::warning(message));
    }

    fn ok(&self) {
        println!("{}", colors::success("OK"));
    }

    fn failed(&self, message: &str) {
        println!("{}", colors::failure("FAILED"));
        println!("{}", message);
    }

    fn failed_with_usage(&self, usage: &str) {
        println!("{}", colors::failure("Incorrect Usage."));
        println!();
        println!("USAGE:");
        println!("   {}", usage);
    }

    fn confirm(&self, prompt: &str) -> bool {
        match prompt_line(prompt) {
            Ok(answer) => is_affirmative(&answer),
            Err(err) => {
                tracing::warn!(error = %err, "Could not read confirmation, treating as declined");
                false
            }
        }
    }
}

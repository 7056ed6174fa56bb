//! PaaS CLI Library
//!
//! This library provides the command framework of the `paas` command-line
//! client: commands declare requirements that must all pass before their
//! action runs, talk to the platform through repository traits, and render
//! through a [`terminal::Ui`] so they can be driven by fakes in tests.

pub mod api;
pub mod commands;
pub mod config;
pub mod interactive;
pub mod output;
pub mod requirements;
pub mod terminal;

pub use commands::{run_command, Command, CommandRegistry, Context, RunOutcome};
pub use config::Config;
pub use terminal::{TerminalUi, Ui};

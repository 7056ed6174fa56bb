use std::collections::HashMap;

use clap::{Arg, ArgAction};

use super::CommandMetadata;

const POSITIONAL: &str = "args";

/// A parsed invocation: positional arguments plus the command's flags
#[derive(Debug, Clone)]
pub struct Context {
    name: String,
    args: Vec<String>,
    flags: HashMap<&'static str, bool>,
}

impl Context {
    /// Parse raw arguments against the flags `metadata` declares.
    ///
    /// Fails on flags the command does not declare.
    pub fn parse(metadata: &CommandMetadata, args: &[String]) -> Result<Self, clap::Error> {
        let mut cli = clap::Command::new(metadata.name)
            .no_binary_name(true)
            .disable_help_flag(true)
            .arg(
                Arg::new(POSITIONAL)
                    .action(ArgAction::Append)
                    .num_args(0..),
            );
        for flag in &metadata.flags {
            cli = cli.arg(
                Arg::new(flag.long)
                    .short(flag.short)
                    .long(flag.long)
                    .help(flag.help)
                    .action(ArgAction::SetTrue)
                    .overrides_with(flag.long),
            );
        }

        let matches = cli.try_get_matches_from(args)?;

        let positional = matches
            .get_many::<String>(POSITIONAL)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let flags = metadata
            .flags
            .iter()
            .map(|flag| (flag.long, matches.get_flag(flag.long)))
            .collect();

        Ok(Self {
            name: metadata.name.to_string(),
            args: positional,
            flags,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional arguments in order
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Value of a declared boolean flag, by long name
    pub fn bool(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }
}

//! Interactive prompts

use std::io::{self, BufRead, Write};

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Prompt for one line of input; an empty answer is allowed.
///
/// On a terminal this is a dialoguer prompt. When stdin is piped the prompt
/// goes to stdout and one line is read from stdin; end of input answers "".
pub fn prompt_line(prompt: &str) -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        return Ok(input);
    }

    print!("{} ", prompt);
    io::stdout().flush()?;
    Ok(read_answer(&mut io::stdin().lock())?.unwrap_or_default())
}

/// Read one answer line from `reader`, without its line ending.
///
/// `None` means the input ended before any answer was given.
pub fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Whether a confirmation answer means yes.
///
/// Only `y` and `yes` are accepted, in any letter case. Anything else,
/// including an empty answer, declines.
pub fn is_affirmative(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

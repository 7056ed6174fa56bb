//! Output styling for CLI

/// Color helpers
pub mod colors {
    use colored::*;

    pub fn success(s: &str) -> ColoredString {
        s.green().bold()
    }

    pub fn failure(s: &str) -> ColoredString {
        s.red().bold()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Names of users, orgs and other platform entities
    pub fn entity(s: &str) -> ColoredString {
        s.cyan().bold()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

#[cfg(test)]
mod tests {
    use super::colors;

    #[test]
    fn test_colors_keep_text() {
        colored::control::set_override(false);
        assert_eq!(colors::entity("my-user").to_string(), "my-user");
        assert_eq!(colors::success("OK").to_string(), "OK");
        colored::control::unset_override();
    }
}

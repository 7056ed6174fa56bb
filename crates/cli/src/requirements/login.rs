use std::sync::Arc;

use super::Requirement;
use crate::config::Config;
use crate::output::colors;
use crate::terminal::Ui;

/// Met when the configuration carries a session token
pub struct LoginRequirement {
    ui: Arc<dyn Ui>,
    config: Arc<Config>,
}

impl LoginRequirement {
    pub fn new(ui: Arc<dyn Ui>, config: Arc<Config>) -> Self {
        Self { ui, config }
    }
}

impl Requirement for LoginRequirement {
    fn name(&self) -> &'static str {
        "login"
    }

    fn execute(&self) -> bool {
        if self.config.is_logged_in() {
            return true;
        }

        self.ui.failed(&format!(
            "Not logged in. Use '{}' to log in.",
            colors::entity("paas login")
        ));
        false
    }
}

use parking_lot::RwLock;
use std::sync::Arc;

use super::{Requirement, UserRequirement};
use crate::api::UserRepository;
use crate::terminal::Ui;
use paas_domain::UserFields;

#[derive(Debug)]
enum Lookup {
    Pending,
    Found(UserFields),
    Missing,
}

/// Resolves a username through the [`UserRepository`]
pub struct ApiUserRequirement {
    username: String,
    ui: Arc<dyn Ui>,
    user_repo: Arc<dyn UserRepository>,
    lookup: RwLock<Lookup>,
}

impl ApiUserRequirement {
    pub fn new(username: &str, ui: Arc<dyn Ui>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            username: username.to_string(),
            ui,
            user_repo,
            lookup: RwLock::new(Lookup::Pending),
        }
    }
}

impl Requirement for ApiUserRequirement {
    fn name(&self) -> &'static str {
        "user"
    }

    fn execute(&self) -> bool {
        match self.user_repo.find_by_username(&self.username) {
            Ok(Some(user)) => {
                *self.lookup.write() = Lookup::Found(user);
                true
            }
            Ok(None) => {
                tracing::debug!(username = %self.username, "User lookup found nothing");
                *self.lookup.write() = Lookup::Missing;
                true
            }
            Err(err) => {
                tracing::debug!(username = %self.username, error = %err, "User lookup failed");
                self.ui.failed(&err.to_string());
                false
            }
        }
    }
}

impl UserRequirement for ApiUserRequirement {
    fn user(&self) -> Option<UserFields> {
        match &*self.lookup.read() {
            Lookup::Found(user) => Some(user.clone()),
            Lookup::Missing => None,
            Lookup::Pending => panic!(
                "user requirement for `{}` read before it was executed",
                self.username
            ),
        }
    }

    fn into_requirement(self: Arc<Self>) -> Arc<dyn Requirement> {
        self
    }
}

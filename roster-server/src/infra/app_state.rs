use std::{fmt, sync::Arc};

use roster_core::UserListService;

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    users: Arc<UserListService>,
    config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(users: Arc<UserListService>, config: Arc<Config>) -> Self {
        Self { users, config }
    }

    pub fn users(&self) -> &UserListService {
        &self.users
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum::Router;
use axum_test::TestServer;
use roster_core::{UserDirectory, UserListService};
use roster_server::{
    create_app,
    infra::{app_state::AppState, config::Config},
};

#[allow(unused)]
pub fn build_state(config: Config, directory: UserDirectory) -> AppState {
    AppState::new(
        Arc::new(UserListService::new(directory)),
        Arc::new(config),
    )
}

#[allow(unused)]
pub fn serve(router: Router) -> Result<TestServer> {
    TestServer::builder()
        .build(router)
        .map_err(|err| anyhow!(err.to_string()))
}

/// Server over the seeded directory with default configuration.
#[allow(unused)]
pub fn build_test_server() -> Result<TestServer> {
    build_test_server_with(Config::default())
}

#[allow(unused)]
pub fn build_test_server_with(config: Config) -> Result<TestServer> {
    serve(create_app(build_state(config, UserDirectory::seeded())))
}

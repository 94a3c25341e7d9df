#![allow(dead_code)]

pub mod http;
pub mod mock_platforms;

use axum::Router;
use makerbadge_lib::{
    config::ServiceConfig,
    server::{create_router, ServerState},
};
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-token";

/// Router whose adapters all talk to `mock`.
pub fn app_for(mock: &mock_platforms::MockPlatformServer, token: Option<&str>) -> Router {
    let mut config = ServiceConfig::default()
        .with_api_base(&mock.base_url)
        .expect("mock base url is valid")
        .with_http_timeout(1);
    if let Some(token) = token {
        config = config.with_thingiverse_token(token);
    }
    let state = ServerState::new(0, config).expect("failed to build server state");
    create_router(Arc::new(state))
}

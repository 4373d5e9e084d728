#![allow(dead_code)]

use axum_test::TestServer;
use links_uteis::config::{Config, NotFoundMode};
use links_uteis::routes::service_router;
use links_uteis::server::build_state;
use links_uteis::state::AppState;

/// State with the default links seeded, answering missing links with `mode`.
pub fn create_test_state(mode: NotFoundMode) -> AppState {
    let config = Config {
        not_found_mode: mode,
        ..Config::default()
    };
    build_state(&config)
}

/// State with an empty registry.
pub fn create_empty_state() -> AppState {
    let config = Config {
        seed_links: false,
        ..Config::default()
    };
    build_state(&config)
}

/// Full router around `state`, ready for requests.
pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(service_router(state)).unwrap()
}

/// Seeded server using the compatible empty-body not-found answers.
pub fn default_server() -> TestServer {
    make_server(create_test_state(NotFoundMode::Empty))
}

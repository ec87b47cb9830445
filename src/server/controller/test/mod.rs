use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{router::router, service::scoring::Scoring, state::AppState};


/// Builds a test server over the given database with the default strategies.
fn test_server(db: &DatabaseConnection) -> TestServer {
    let state = AppState::new(db.clone(), Scoring::default());
    let app = router(Duration::from_secs(30)).with_state(state);

    TestServer::new(app).unwrap()
}

//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed
//! by the handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Scoring strategies for synergy, card value and interaction strength

use sea_orm::DatabaseConnection;

use crate::server::service::scoring::Scoring;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle whose clones
/// share the pool, and `Scoring` holds reference-counted strategies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Scoring strategies injected into the card and deck services.
    pub scoring: Scoring,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `scoring` - Scoring strategies
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, scoring: Scoring) -> Self {
        Self { db, scoring }
    }
}

//! API handlers.

pub mod admin;
pub mod health;
pub mod user;

pub use admin::*;
pub use health::*;
pub use user::*;

use std::sync::Arc;

use crate::db::{AccountRepository, Database, SqliteAccountRepository};

/// Application state shared across handlers.
///
/// Built once at startup; handlers reach storage only through the account
/// repository held here.
#[derive(Clone)]
pub struct AppState {
    /// Account repository.
    pub accounts: Arc<dyn AccountRepository>,
}

impl AppState {
    /// Create a new application state around an account repository.
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Create application state backed by the given database.
    pub fn from_database(db: &Database) -> Self {
        Self::new(Arc::new(SqliteAccountRepository::new(db.pool().clone())))
    }
}

//! Persistence for the site-suggestion store.
//!
//! Provides SQLite connection management and schema migrations for the
//! history and bookmark tables queried by URL-bar suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use urlbar_suggest::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("urlbar.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::{Database, SharedDatabase};

//! # Hilltop
//!
//! A school website and its content backend, usable both as a standalone
//! binary and as a library.
//!
//! Public pages are rendered from rows in the content store. Every section
//! falls back to built-in content when its rows are missing or the store is
//! unreachable, so the site never renders empty. Signed-in admins edit the
//! content from `/admin`.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! hilltop = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hilltop::server::{AppState, create_router};
//! use hilltop::store::SqliteStore;
//!
//! let store = SqliteStore::new("./data/hilltop.db").unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store)));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `hilltop` binary. Disable with `default-features = false`.

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod rotation;
pub mod server;
pub mod store;
pub mod types;

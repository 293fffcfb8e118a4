//! propdash-server: storage and REST API for the property dashboard
//!
//! Properties, tenants, leases, payments and maintenance requests live in one
//! SQLite file. The HTTP layer exposes joined list views, insert-only writes,
//! and aggregate dashboard figures.

pub mod db;
pub mod http;
pub mod models;

pub use db::{Database, DbError, SeedOutcome};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};

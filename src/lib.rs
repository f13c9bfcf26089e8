//! Bakery API: bakeries and their baked goods over REST, stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{app_router, baked_good_routes, bakery_routes, common_routes};
pub use seed::seed_if_empty;
pub use service::{BakedGoodService, BakeryService};
pub use state::AppState;
pub use store::{connect_pool, memory_pool};

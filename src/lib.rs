//! Bookshelf
//!
//! An in-memory book record store exposed as a REST JSON API: add, list,
//! fetch, update and delete books.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state around a fresh, empty book store
    pub fn new(config: &AppConfig) -> Self {
        let repository = repository::Repository::new();
        let services = services::Services::new(repository, config.books.clone());
        Self {
            services: Arc::new(services),
        }
    }
}

pub mod config;
pub mod console;
pub mod controllers;
pub mod models;
pub mod services;

// Shared state for the whole session
pub struct AppState {
    pub hall: models::Hall,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config, hall: models::Hall) -> Self {
        Self { hall, config }
    }
}

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::UserService>,
    pub auth_service: Arc<services::AuthService>,
}

impl AppState {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        let repository: Arc<dyn repositories::UserRegistrationRepository> =
            Arc::new(repositories::SqliteUserRegistrationRepository::new(pool));

        Self {
            user_service: Arc::new(services::UserService::new(repository.clone())),
            auth_service: Arc::new(services::AuthService::new(repository)),
        }
    }
}

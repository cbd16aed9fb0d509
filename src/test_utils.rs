pub mod test_helpers {
    use crate::{
        auth::password::hash_password,
        config::{
            session::{create_session_store, SessionConfig},
            Environment,
        },
        models::{NewUserRegistration, UserRegistration},
        repositories::{SqliteUserRegistrationRepository, UserRegistrationRepository},
        routes, AppState,
    };
    use axum::Router;
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
    use tower_sessions::cookie::Key;

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Insert a registration with an Argon2 hash of `password`
    pub async fn insert_test_user(
        pool: &SqlitePool,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        gender: &str,
    ) -> Result<UserRegistration, sqlx::Error> {
        let password_hash = hash_password(password).map_err(|e| {
            sqlx::Error::Configuration(format!("Password hashing failed: {}", e).into())
        })?;

        let repository = SqliteUserRegistrationRepository::new(pool.clone());
        repository
            .create(NewUserRegistration {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                password_hash,
                gender: gender.to_string(),
            })
            .await
            .map_err(|e| sqlx::Error::Protocol(e.to_string()))
    }

    /// Full application router over `pool` with development cookie settings
    pub async fn create_test_app(pool: SqlitePool) -> Result<Router, sqlx::Error> {
        let store = create_session_store(pool.clone()).await?;
        let session_layer = SessionConfig::for_environment(Environment::Development)
            .create_layer_with_key(store, Key::generate());

        Ok(routes::router(
            AppState::new(pool),
            session_layer,
            Environment::Development,
        ))
    }
}

// Re-export commonly used test functions at module level for convenience
// Note: This is test-only code. Panic on error is acceptable in tests.
#[cfg(test)]
pub async fn create_test_pool() -> sqlx::SqlitePool {
    match test_helpers::create_test_db().await {
        Ok(pool) => pool,
        Err(e) => panic!("Failed to create test pool: {}", e),
    }
}

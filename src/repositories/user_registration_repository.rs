use crate::models::{NewUserRegistration, UserRegistration};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("User not found")]
    NotFound,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait UserRegistrationRepository: Send + Sync {
    async fn create(&self, new_user: NewUserRegistration) -> RepositoryResult<UserRegistration>;
    /// All registrations sharing `email`, oldest first. Emails are not unique.
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Vec<UserRegistration>>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<UserRegistration>>;
    async fn list_all(&self) -> RepositoryResult<Vec<UserRegistration>>;
}

pub struct SqliteUserRegistrationRepository {
    pool: SqlitePool,
}

impl SqliteUserRegistrationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, first_name, last_name, email, password, gender, date_registration
    FROM user_registrations
"#;

#[async_trait]
impl UserRegistrationRepository for SqliteUserRegistrationRepository {
    async fn create(&self, new_user: NewUserRegistration) -> RepositoryResult<UserRegistration> {
        let result = sqlx::query(
            r#"
            INSERT INTO user_registrations
                (first_name, last_name, email, password, gender, date_registration)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.gender)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Vec<UserRegistration>> {
        let users = sqlx::query_as::<_, UserRegistration>(&format!(
            "{SELECT_COLUMNS} WHERE email = ? ORDER BY id ASC"
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<UserRegistration>> {
        let user = sqlx::query_as::<_, UserRegistration>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<UserRegistration>> {
        let users = sqlx::query_as::<_, UserRegistration>(&format!(
            "{SELECT_COLUMNS} ORDER BY date_registration ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_pool;

    fn new_user(first_name: &str, email: &str) -> NewUserRegistration {
        NewUserRegistration {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            gender: "Female".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_sets_registration_date() {
        let repo = SqliteUserRegistrationRepository::new(create_test_pool().await);
        let before = Utc::now();

        let user = repo
            .create(new_user("Jane", "jane@example.com"))
            .await
            .expect("insert to succeed");

        assert!(user.id > 0);
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.email, "jane@example.com");
        assert!(user.date_registration >= before - chrono::Duration::seconds(1));
    }

    #[tokio::test]
    async fn test_find_by_email_returns_duplicates_in_id_order() {
        let repo = SqliteUserRegistrationRepository::new(create_test_pool().await);
        let first = repo.create(new_user("A", "dup@example.com")).await.unwrap();
        let second = repo.create(new_user("B", "dup@example.com")).await.unwrap();
        repo.create(new_user("C", "other@example.com")).await.unwrap();

        let found = repo.find_by_email("dup@example.com").await.unwrap();
        let ids: Vec<i64> = found.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_find_by_email_is_exact_match() {
        let repo = SqliteUserRegistrationRepository::new(create_test_pool().await);
        repo.create(new_user("A", "exact@example.com")).await.unwrap();

        assert!(repo.find_by_email("EXACT@example.com").await.unwrap().is_empty());
        assert!(repo.find_by_email("exact@example").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = SqliteUserRegistrationRepository::new(create_test_pool().await);
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_in_registration_order() {
        let repo = SqliteUserRegistrationRepository::new(create_test_pool().await);
        repo.create(new_user("John", "john@example.com")).await.unwrap();
        repo.create(new_user("Jane", "jane@example.com")).await.unwrap();

        let users = repo.list_all().await.unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.first_name.as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }
}

use registration::{
    models::NewUserRegistration,
    repositories::{SqliteUserRegistrationRepository, UserRegistrationRepository},
    test_utils::test_helpers,
};

#[tokio::test]
async fn test_user_creation() {
    let pool = test_helpers::create_test_db().await.unwrap();

    let user = test_helpers::insert_test_user(
        &pool,
        "Test",
        "User",
        "test@example.com",
        "password",
        "Male",
    )
    .await
    .unwrap();

    assert_eq!(user.first_name, "Test");
    assert_eq!(user.last_name, "User");
    assert_eq!(user.email, "test@example.com");
    assert!(user.date_registration <= chrono::Utc::now());
}

#[tokio::test]
async fn test_user_string_representation() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = SqliteUserRegistrationRepository::new(pool);

    // The model does not care what the password column holds
    let user = repository
        .create(NewUserRegistration {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "password".to_string(),
            gender: "Male".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.to_string(), "TestUser");
}

#[tokio::test]
async fn test_registration_date_round_trips_through_storage() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let created =
        test_helpers::insert_test_user(&pool, "A", "B", "ab@example.com", "pw", "Other")
            .await
            .unwrap();

    let repository = SqliteUserRegistrationRepository::new(pool);
    let fetched = repository.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.date_registration, created.date_registration);
}

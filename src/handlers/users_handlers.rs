use crate::auth::session::current_user_name;
use crate::error::Result;
use crate::models::UserRegistration;
use crate::AppState;
use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;

#[derive(Template, WebTemplate)]
#[template(path = "registration/users_list.html")]
pub struct UsersListTemplate {
    pub user_name: Option<String>,
    pub users: Vec<UserRegistration>,
}

/// Lists every registration. Mounted behind `require_auth`.
pub async fn users_list_handler(
    State(app_state): State<AppState>,
    session: Session,
) -> Result<UsersListTemplate> {
    let user_name = current_user_name(&session).await?;
    let users = app_state.user_service.list_users().await?;

    Ok(UsersListTemplate { user_name, users })
}

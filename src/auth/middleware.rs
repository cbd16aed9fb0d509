use crate::auth::session::{clear, current_user_id};
use crate::error::AppError;
use crate::handlers::{found, LOGIN_PATH};
use crate::services::AuthServiceError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

/// Let the request through only when the session's `user_id` still names a
/// stored user. A session pointing at a vanished user is flushed.
pub async fn require_auth(
    State(app_state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    let user_id = match current_user_id(&session).await {
        Ok(Some(user_id)) => user_id,
        Ok(None) => return found(LOGIN_PATH),
        Err(e) => {
            tracing::warn!("Session lookup failed, treating request as anonymous: {}", e);
            return found(LOGIN_PATH);
        }
    };

    match app_state.auth_service.get_user_by_id(user_id).await {
        Ok(_) => next.run(request).await,
        Err(AuthServiceError::UserNotFound) => {
            tracing::warn!(user_id, "Session refers to a missing user, signing out");
            if let Err(e) = clear(&session).await {
                tracing::warn!("Failed to flush stale session: {}", e);
            }
            found(LOGIN_PATH)
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

use crate::{
    auth,
    config::{session::SessionLayer, Environment},
    handlers::{self, LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH, USERS_PATH},
    middleware::security_headers,
    AppState,
};
use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

/// The full application: public auth pages plus the session-gated listing.
pub fn router(state: AppState, session_layer: SessionLayer, environment: Environment) -> Router {
    let protected_routes = Router::new()
        .route(USERS_PATH, get(handlers::users_list_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .route("/", get(handlers::index_handler))
        .route(
            LOGIN_PATH,
            get(auth::handlers::login_page).post(auth::handlers::login_handler),
        )
        .route(
            REGISTER_PATH,
            get(auth::handlers::register_page).post(auth::handlers::register_handler),
        )
        .route(LOGOUT_PATH, get(auth::handlers::logout_handler))
        .merge(protected_routes)
        .layer(session_layer)
        .layer(middleware::from_fn_with_state(environment, security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{routing::get, Router};

use crate::handlers::auth_handlers::{login, logout, show_login};
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(show_login).post(login))
        .route("/logout", get(logout))
}

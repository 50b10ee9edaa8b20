use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::handlers::qr_handlers::{qr_code, qr_svg};
use crate::handlers::url_handlers::{
    delete_any_url, delete_my_url, edit, home, manage_urls, my_urls, show_edit, show_shorten,
    shorten,
};
use crate::handlers::user_handlers::{create_user, delete_user, manage_users};
use crate::middleware::auth_middleware::{admin_middleware, auth_middleware};
use crate::state::AppState;

pub fn dashboard_routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/dashboard/manage-urls", get(manage_urls))
        .route("/dashboard/manage-urls/{id}/delete", post(delete_any_url))
        .route("/dashboard/manage-users", get(manage_users).post(create_user))
        .route("/dashboard/manage-users/{id}/delete", post(delete_user))
        .route_layer(from_fn(admin_middleware));

    Router::new()
        .route("/dashboard", get(home))
        .route("/dashboard/shorten-url", get(show_shorten).post(shorten))
        .route("/dashboard/my-urls", get(my_urls))
        .route("/dashboard/my-urls/{id}/edit", get(show_edit).post(edit))
        .route("/dashboard/my-urls/{id}/delete", post(delete_my_url))
        .route("/dashboard/qr-code", get(qr_code))
        .route("/dashboard/qr-code/{alias}", get(qr_svg))
        .merge(admin)
        // every dashboard page needs a session, admin pages check it afterwards
        .route_layer(from_fn(auth_middleware))
}

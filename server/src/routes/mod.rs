pub mod auth;
pub mod dashboard;

use axum::{http::header, response::IntoResponse, routing::get, Router};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::views::layout::{STYLESHEET, STYLESHEET_PATH};

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLESHEET)
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(STYLESHEET_PATH, get(stylesheet))
        .merge(auth::auth_routes())
        .merge(dashboard::dashboard_routes())
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use crate::test_support::{body_text, get_request, test_app, FakeApi};
    use axum::http::{header, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn stylesheet_is_public() {
        let response = test_app(FakeApi::default())
            .oneshot(get_request("/static/app.css", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
        assert!(body_text(response).await.contains(".sidebar"));
    }
}

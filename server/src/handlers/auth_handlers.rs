use axum::{
    extract::{Form, State},
    http::HeaderName,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use skylapp_client::Credentials;
use tower_cookies::Cookies;

use super::describe;
use super::jwt::decode_claims;
use crate::middleware::auth_middleware::{clear_session_cookie, session_cookie};
use crate::state::AppState;
use crate::views::login::{logged_out_page, login_page};

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

pub async fn show_login() -> Html<String> {
    Html(login_page("", None))
}

pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(payload): Form<LoginPayload>,
) -> Response {
    let credentials = Credentials {
        email: payload.email.trim().to_string(),
        password: payload.password,
    };

    match state.api.login(&credentials).await {
        Ok(token) => match decode_claims(&token) {
            Ok(claims) if !claims.is_expired() => {
                cookies.add(session_cookie(token, state.secure_cookies));
                tracing::info!("{} logged in", credentials.email);
                Redirect::to("/dashboard").into_response()
            }
            Ok(_) => {
                tracing::warn!("login for {} returned an expired token", credentials.email);
                let message = "Login failed: the server returned an expired token.";
                Html(login_page(&credentials.email, Some(message))).into_response()
            }
            Err(e) => {
                tracing::warn!("login for {} returned an unreadable token: {}", credentials.email, e);
                let message = "Login failed: the server returned an unreadable token.";
                Html(login_page(&credentials.email, Some(message))).into_response()
            }
        },
        Err(e) => {
            tracing::warn!("login error for {}: {}", credentials.email, e);
            let message = describe(&e, "Login failed with status", "Login failed with status: 401");
            Html(login_page(&credentials.email, Some(&message))).into_response()
        }
    }
}

pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    clear_session_cookie(&cookies);
    (
        [(HeaderName::from_static("refresh"), "1;url=/")],
        Html(logged_out_page()),
    )
}

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_cookies::{cookie::time::Duration, cookie::SameSite, Cookie, Cookies};

use crate::handlers::jwt::decode_claims;
use crate::models::session::Session;

pub const AUTH_COOKIE: &str = "authToken";

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .max_age(Duration::days(1))
        .same_site(SameSite::Strict)
        .http_only(true)
        .secure(secure)
        .build()
}

pub fn clear_session_cookie(cookies: &Cookies) {
    cookies.remove(Cookie::build((AUTH_COOKIE, "")).path("/").build());
}

/// Resolves the session from the token cookie, sending anonymous visitors to the login page.
pub async fn auth_middleware(mut req: Request<Body>, next: Next) -> Response {
    // 1. tower_cookies layer puts the jar into the extensions
    let cookies = match req.extensions().get::<Cookies>() {
        Some(c) => c.clone(),
        None => {
            tracing::error!("cookie manager layer missing");
            return Redirect::to("/").into_response();
        }
    };

    // 2. token cookie
    let token = match cookies.get(AUTH_COOKIE) {
        Some(c) => c.value().to_string(),
        None => {
            tracing::debug!("no token cookie on {}", req.uri());
            return Redirect::to("/").into_response();
        }
    };

    // 3. payload
    let claims = match decode_claims(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!("error decoding token: {}", e);
            clear_session_cookie(&cookies);
            return Redirect::to("/").into_response();
        }
    };

    if claims.is_expired() {
        tracing::debug!("token of {} expired", claims.sub);
        clear_session_cookie(&cookies);
        return Redirect::to("/").into_response();
    }

    req.extensions_mut().insert(Session { token, claims });
    next.run(req).await
}

/// Lets only administrators through; everybody else lands on the dashboard home.
pub async fn admin_middleware(req: Request<Body>, next: Next) -> Response {
    let is_admin = req
        .extensions()
        .get::<Session>()
        .is_some_and(Session::is_admin);

    if !is_admin {
        tracing::warn!("non-admin request to {} redirected", req.uri());
        return Redirect::to("/dashboard").into_response();
    }

    next.run(req).await
}

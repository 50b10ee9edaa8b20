use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use skylapp_client::{
    ApiError, Credentials, NewUser, ShortenRequest, ShortenerApi, UrlRecord, UrlUpdate, UserRecord,
};

use crate::config::Config;
use crate::handlers::jwt::tests::mint;
use crate::routes;
use crate::state::AppState;

/// In-memory stand-in for the remote API. Every call is recorded as `"<op> <token> <detail>"`.
#[derive(Default, Clone)]
pub struct FakeApi {
    pub token: Option<String>,
    pub urls: Vec<UrlRecord>,
    pub users: Vec<UserRecord>,
    pub fail: Option<fn() -> ApiError>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.fail {
            Some(fail) => Err(fail()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ShortenerApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.record(format!("login {}", credentials.email))?;
        self.token.clone().ok_or(ApiError::EmptyToken)
    }

    async fn shorten(&self, token: &str, request: &ShortenRequest) -> Result<UrlRecord, ApiError> {
        self.record(format!("shorten {token} {} {:?}", request.url, request.alias))?;
        Ok(UrlRecord {
            id: 100,
            url: request.url.clone(),
            alias: request.alias.clone().unwrap_or_else(|| "Xy12".to_string()),
            click_count: 0,
            created_by: None,
            expiration_date: None,
        })
    }

    async fn user_urls(&self, token: &str) -> Result<Vec<UrlRecord>, ApiError> {
        self.record(format!("user_urls {token}"))?;
        Ok(self.urls.clone())
    }

    async fn all_urls(&self, token: &str) -> Result<Vec<UrlRecord>, ApiError> {
        self.record(format!("all_urls {token}"))?;
        Ok(self.urls.clone())
    }

    async fn update_url(&self, token: &str, id: i64, update: &UrlUpdate) -> Result<(), ApiError> {
        self.record(format!("update_url {token} {id} {} {:?}", update.url, update.alias))
    }

    async fn delete_url(&self, token: &str, id: i64) -> Result<(), ApiError> {
        self.record(format!("delete_url {token} {id}"))
    }

    async fn users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        self.record(format!("users {token}"))?;
        Ok(self.users.clone())
    }

    async fn register_user(&self, token: &str, user: &NewUser) -> Result<(), ApiError> {
        self.record(format!("register_user {token} {}", user.email))
    }

    async fn delete_user(&self, token: &str, id: i64) -> Result<(), ApiError> {
        self.record(format!("delete_user {token} {id}"))
    }
}

pub fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        api_url: "https://api.skyl.app".parse().unwrap(),
        short_base: "https://skyl.app".parse().unwrap(),
        secure_cookies: false,
        api_timeout: std::time::Duration::from_secs(1),
    }
}

pub fn test_app(api: FakeApi) -> Router {
    routes::app(AppState::new(Arc::new(api), &test_config()))
}

pub fn user_token() -> String {
    mint(&["ROLE_USER"], 3600)
}

pub fn admin_token() -> String {
    mint(&["ROLE_USER", "ROLE_ADMIN"], 3600)
}

pub fn url_record(id: i64, alias: &str) -> UrlRecord {
    UrlRecord {
        id,
        url: format!("https://example.com/{alias}"),
        alias: alias.to_string(),
        click_count: 3,
        created_by: None,
        expiration_date: None,
    }
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("authToken={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form_request(uri: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("authToken={token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

use crate::error::{extract_message, ApiError};
use crate::{Credentials, NewUser, ShortenRequest, UrlRecord, UrlUpdate, UserRecord};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.skyl.app";

const ALIAS_EXISTS: &str = "Alias already exists";

/// Operations the dashboard performs against the shortening service.
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;
    async fn shorten(&self, token: &str, request: &ShortenRequest) -> Result<UrlRecord, ApiError>;
    async fn user_urls(&self, token: &str) -> Result<Vec<UrlRecord>, ApiError>;
    async fn all_urls(&self, token: &str) -> Result<Vec<UrlRecord>, ApiError>;
    async fn update_url(&self, token: &str, id: i64, update: &UrlUpdate) -> Result<(), ApiError>;
    async fn delete_url(&self, token: &str, id: i64) -> Result<(), ApiError>;
    async fn users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError>;
    async fn register_user(&self, token: &str, user: &NewUser) -> Result<(), ApiError>;
    async fn delete_user(&self, token: &str, id: i64) -> Result<(), ApiError>;
}

pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    fn bearer(token: &str) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn get_json<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .headers(Self::bearer(token)?)
            .send()
            .await?;

        Ok(check(response).await?.json::<T>().await?)
    }

    async fn delete(&self, token: &str, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.endpoint(path)?)
            .headers(Self::bearer(token)?)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}

/// Maps non-2xx responses of authenticated calls onto [`ApiError`].
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        tracing::warn!("API rejected the bearer token with status {}", status);
        return Err(ApiError::Unauthorized(status));
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!("API call failed with status {}: {}", status, body);
    Err(ApiError::Status {
        status,
        message: extract_message(&body),
    })
}

/// Strips every whitespace character; an empty alias means "let the service pick one".
pub fn normalize_alias(input: &str) -> Option<String> {
    let alias: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if alias.is_empty() {
        None
    } else {
        Some(alias)
    }
}

#[async_trait]
impl ShortenerApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint("auth/login")?)
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!("login for {} failed with status {}", credentials.email, status);
            let message = body.trim();
            return Err(ApiError::Status {
                status,
                message: (!message.is_empty()).then(|| message.to_string()),
            });
        }

        let token = body.trim().to_string();
        if token.is_empty() {
            return Err(ApiError::EmptyToken);
        }
        if token.split('.').count() != 3 {
            tracing::warn!("received token doesn't look like a standard JWT");
        }

        tracing::debug!("login succeeded for {}", credentials.email);
        Ok(token)
    }

    async fn shorten(&self, token: &str, request: &ShortenRequest) -> Result<UrlRecord, ApiError> {
        let response = self
            .client
            .post(self.endpoint("shorten")?)
            .headers(Self::bearer(token)?)
            .json(request)
            .send()
            .await?;

        let response = match check(response).await {
            Ok(response) => response,
            Err(err) => {
                let taken = match (&request.alias, err.server_message()) {
                    (Some(alias), Some(message)) if message.contains(ALIAS_EXISTS) => {
                        Some(alias.clone())
                    }
                    _ => None,
                };
                return Err(taken.map(ApiError::AliasTaken).unwrap_or(err));
            }
        };

        let record = response.json::<UrlRecord>().await?;
        tracing::debug!("shortened {} to alias {}", record.url, record.alias);
        Ok(record)
    }

    async fn user_urls(&self, token: &str) -> Result<Vec<UrlRecord>, ApiError> {
        self.get_json(token, "urls/getUserUrls").await
    }

    async fn all_urls(&self, token: &str) -> Result<Vec<UrlRecord>, ApiError> {
        self.get_json(token, "urls/getAllUrls").await
    }

    async fn update_url(&self, token: &str, id: i64, update: &UrlUpdate) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.endpoint(&format!("urls/{id}"))?)
            .headers(Self::bearer(token)?)
            .json(update)
            .send()
            .await?;

        check(response).await?;
        tracing::debug!("updated url {} to target {}", id, update.url);
        Ok(())
    }

    async fn delete_url(&self, token: &str, id: i64) -> Result<(), ApiError> {
        self.delete(token, &format!("urls/{id}")).await?;
        tracing::debug!("deleted url {}", id);
        Ok(())
    }

    async fn users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        self.get_json(token, "users").await
    }

    async fn register_user(&self, token: &str, user: &NewUser) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("auth/register")?)
            .headers(Self::bearer(token)?)
            .json(user)
            .send()
            .await?;

        check(response).await?;
        tracing::debug!("registered user {}", user.email);
        Ok(())
    }

    async fn delete_user(&self, token: &str, id: i64) -> Result<(), ApiError> {
        self.delete(token, &format!("users/{id}")).await?;
        tracing::debug!("deleted user {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(url: &str) -> ApiClient {
        ApiClient::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn normalize_alias_strips_whitespace() {
        assert_eq!(normalize_alias(" my link "), Some("mylink".to_string()));
        assert_eq!(normalize_alias(" \t "), None);
        assert_eq!(normalize_alias(""), None);
    }

    #[test]
    fn base_url_keeps_its_path_prefix() {
        let api = client("https://api.example.com/v1");
        assert_eq!(
            api.endpoint("shorten").unwrap().as_str(),
            "https://api.example.com/v1/shorten"
        );
    }

    #[tokio::test]
    async fn login_returns_trimmed_token_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .match_body(Matcher::Json(json!({ "email": "sky@gmail.com", "password": "pw" })))
            .with_status(200)
            .with_body("aaa.bbb.ccc\n")
            .expect(1)
            .create_async()
            .await;

        let token = client(&server.url())
            .login(&Credentials {
                email: "sky@gmail.com".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();

        assert_eq!(token, "aaa.bbb.ccc");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn login_failure_carries_body_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body("Bad credentials")
            .create_async()
            .await;

        let err = client(&server.url())
            .login(&Credentials {
                email: "x@y.z".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();

        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(message.as_deref(), Some("Bad credentials"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_rejects_empty_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_body("   ")
            .create_async()
            .await;

        let err = client(&server.url())
            .login(&Credentials {
                email: "x@y.z".into(),
                password: "pw".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::EmptyToken));
    }

    #[tokio::test]
    async fn shorten_sends_bearer_token_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/shorten")
            .match_header("authorization", "Bearer tok")
            .match_header("accept", "application/json")
            .match_body(Matcher::Json(json!({ "url": "https://example.com", "alias": null })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": 1, "url": "https://example.com", "alias": "Xy12",
                    "clickCount": 0, "createdBy": null, "expirationDate": null
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let record = client(&server.url())
            .shorten(
                "tok",
                &ShortenRequest {
                    url: "https://example.com".into(),
                    alias: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(record.alias, "Xy12");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn shorten_reports_taken_alias() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/shorten")
            .with_status(409)
            .with_body(r#"{"message": "Alias already exists: promo"}"#)
            .create_async()
            .await;

        let err = client(&server.url())
            .shorten(
                "tok",
                &ShortenRequest {
                    url: "https://example.com".into(),
                    alias: Some("promo".into()),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::AliasTaken(alias) if alias == "promo"));
    }

    #[tokio::test]
    async fn list_maps_forbidden_to_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/urls/getAllUrls")
            .with_status(403)
            .create_async()
            .await;

        let err = client(&server.url()).all_urls("tok").await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(status) if status == StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn list_failure_extracts_json_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/urls/getUserUrls")
            .with_status(500)
            .with_body(r#"{"error": "Internal Server Error"}"#)
            .create_async()
            .await;

        let err = client(&server.url()).user_urls("tok").await.unwrap_err();
        assert_eq!(err.server_message(), Some("Internal Server Error"));
    }

    #[tokio::test]
    async fn users_are_listed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(
                json!([{
                    "id": 1, "firstName": "Sky", "lastName": "Lab", "email": "sky@gmail.com",
                    "enabled": true, "authorities": [{"authority": "ROLE_ADMIN"}], "username": "sky@gmail.com"
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let users = client(&server.url()).users("tok").await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].authorities, vec!["ROLE_ADMIN".to_string()]);
    }

    #[tokio::test]
    async fn update_and_delete_hit_id_paths() {
        let mut server = mockito::Server::new_async().await;
        let put = server
            .mock("PUT", "/urls/42")
            .match_body(Matcher::Json(json!({ "url": "https://new.example", "alias": "fresh" })))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;
        let delete_url = server
            .mock("DELETE", "/urls/42")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;
        let delete_user = server
            .mock("DELETE", "/users/9")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let api = client(&server.url());
        api.update_url(
            "tok",
            42,
            &UrlUpdate {
                url: "https://new.example".into(),
                alias: Some("fresh".into()),
            },
        )
        .await
        .unwrap();
        api.delete_url("tok", 42).await.unwrap();
        api.delete_user("tok", 9).await.unwrap();

        put.assert_async().await;
        delete_url.assert_async().await;
        delete_user.assert_async().await;
    }

    #[tokio::test]
    async fn register_user_posts_camel_case_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/register")
            .match_header("authorization", "Bearer tok")
            .match_body(Matcher::PartialJson(json!({ "firstName": "Grace", "email": "g@h.io" })))
            .with_status(201)
            .expect(1)
            .create_async()
            .await;

        client(&server.url())
            .register_user(
                "tok",
                &NewUser {
                    first_name: "Grace".into(),
                    last_name: "Hopper".into(),
                    email: "g@h.io".into(),
                    password: "pw".into(),
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }
}

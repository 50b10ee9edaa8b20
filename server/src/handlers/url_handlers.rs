use axum::{
    extract::{Form, Path, State},
    response::Html,
    Extension,
};
use serde::Deserialize;
use skylapp_client::{normalize_alias, qr::display_prefix, ShortenRequest, UrlRecord, UrlUpdate};
use url::Url;

use super::{describe, FORBIDDEN, UNAUTHORIZED};
use crate::error::AppError;
use crate::models::session::Session;
use crate::state::AppState;
use crate::views::{
    self,
    urls::{edit_page, edit_unavailable_page, shorten_page, url_list_page, ShortenForm, UrlListKind},
    Nav, Notice,
};

#[derive(Deserialize)]
pub struct ShortenPayload {
    pub url: String,
    #[serde(default)]
    pub alias: String,
}

#[derive(Deserialize)]
pub struct EditPayload {
    pub url: String,
    #[serde(default)]
    pub alias: String,
}

const MY_URLS: &str = "/dashboard/my-urls";
const MANAGE_URLS: &str = "/dashboard/manage-urls";
const SHORTEN_URL: &str = "/dashboard/shorten-url";

fn validate_url(input: &str) -> Result<String, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Original URL is required.".to_string());
    }
    match Url::parse(input) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(input.to_string()),
        _ => Err("Please enter a valid URL, including http:// or https://.".to_string()),
    }
}

pub async fn home(Extension(session): Extension<Session>) -> Html<String> {
    let nav = Nav::new("/dashboard", session.is_admin());
    Html(views::home(&nav, session.subject()))
}

pub async fn show_shorten(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Html<String> {
    let nav = Nav::new(SHORTEN_URL, session.is_admin());
    Html(shorten_page(
        &nav,
        &state.short_base,
        &display_prefix(&state.short_base),
        &ShortenForm::default(),
    ))
}

pub async fn shorten(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(payload): Form<ShortenPayload>,
) -> Html<String> {
    let nav = Nav::new(SHORTEN_URL, session.is_admin());
    let prefix = display_prefix(&state.short_base);
    let alias = normalize_alias(&payload.alias);

    let mut form = ShortenForm {
        url: payload.url.clone(),
        alias: alias.clone().unwrap_or_default(),
        ..ShortenForm::default()
    };

    let url = match validate_url(&payload.url) {
        Ok(url) => url,
        Err(message) => {
            form.error = Some(message);
            return Html(shorten_page(&nav, &state.short_base, &prefix, &form));
        }
    };

    let request = ShortenRequest { url, alias };
    match state.api.shorten(&session.token, &request).await {
        Ok(record) => {
            tracing::info!("{} shortened {} as {}", session.subject(), record.url, record.alias);
            form = ShortenForm {
                created_alias: Some(record.alias),
                success: true,
                ..ShortenForm::default()
            };
        }
        Err(e) => {
            tracing::error!("error shortening URL: {}", e);
            form.error = Some(describe(&e, "Failed to shorten URL", UNAUTHORIZED));
        }
    }

    Html(shorten_page(&nav, &state.short_base, &prefix, &form))
}

async fn list_page(
    state: &AppState,
    session: &Session,
    kind: UrlListKind,
    notice: Option<Notice>,
) -> Html<String> {
    let (path, result) = match kind {
        UrlListKind::Mine => (MY_URLS, state.api.user_urls(&session.token).await),
        UrlListKind::All => (MANAGE_URLS, state.api.all_urls(&session.token).await),
    };
    let nav = Nav::new(path, session.is_admin());

    let html = match result {
        Ok(urls) => url_list_page(&nav, kind, &state.short_base, Ok(urls.as_slice()), notice),
        Err(e) => {
            tracing::error!("error fetching URLs: {}", e);
            let message = match kind {
                UrlListKind::Mine => describe(&e, "Failed to fetch your URLs", UNAUTHORIZED),
                UrlListKind::All => describe(&e, "Failed to fetch URLs", FORBIDDEN),
            };
            url_list_page(&nav, kind, &state.short_base, Err(message), notice)
        }
    };
    Html(html)
}

pub async fn my_urls(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Html<String> {
    list_page(&state, &session, UrlListKind::Mine, None).await
}

pub async fn manage_urls(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Html<String> {
    list_page(&state, &session, UrlListKind::All, None).await
}

async fn delete_and_list(state: &AppState, session: &Session, id: i64, kind: UrlListKind) -> Html<String> {
    let notice = match state.api.delete_url(&session.token, id).await {
        Ok(()) => {
            tracing::info!("{} deleted url {}", session.subject(), id);
            Notice::Success("URL deleted successfully!".to_string())
        }
        Err(e) => {
            tracing::error!("error deleting url {}: {}", id, e);
            Notice::Error(describe(&e, "Failed to delete URL", UNAUTHORIZED))
        }
    };
    list_page(state, session, kind, Some(notice)).await
}

pub async fn delete_my_url(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
) -> Html<String> {
    delete_and_list(&state, &session, id, UrlListKind::Mine).await
}

pub async fn delete_any_url(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
) -> Html<String> {
    delete_and_list(&state, &session, id, UrlListKind::All).await
}

/// Looks up one of the caller's links; the API has no fetch-by-id endpoint.
async fn find_my_url(state: &AppState, session: &Session, id: i64) -> Result<Option<UrlRecord>, String> {
    match state.api.user_urls(&session.token).await {
        Ok(urls) => Ok(urls.into_iter().find(|url| url.id == id)),
        Err(e) => {
            tracing::error!("error fetching URLs for edit: {}", e);
            Err(describe(&e, "Failed to fetch your URLs", UNAUTHORIZED))
        }
    }
}

pub async fn show_edit(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let nav = Nav::new(MY_URLS, session.is_admin());
    let record = match find_my_url(&state, &session, id).await {
        Ok(record) => record.ok_or(AppError::UrlNotFound(id))?,
        Err(message) => return Ok(Html(edit_unavailable_page(&nav, &message))),
    };

    Ok(Html(edit_page(
        &nav,
        &display_prefix(&state.short_base),
        &record,
        &record.url,
        &record.alias,
        None,
    )))
}

pub async fn edit(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i64>,
    Form(payload): Form<EditPayload>,
) -> Result<Html<String>, AppError> {
    let alias = normalize_alias(&payload.alias);
    let result = match validate_url(&payload.url) {
        Ok(url) => {
            let update = UrlUpdate {
                url,
                alias: alias.clone(),
            };
            state
                .api
                .update_url(&session.token, id, &update)
                .await
                .map_err(|e| {
                    tracing::error!("error updating url {}: {}", id, e);
                    describe(&e, "Failed to update URL", UNAUTHORIZED)
                })
        }
        Err(message) => Err(message),
    };

    let message = match result {
        Ok(()) => {
            tracing::info!("{} updated url {}", session.subject(), id);
            let notice = Notice::Success("URL updated successfully!".to_string());
            return Ok(list_page(&state, &session, UrlListKind::Mine, Some(notice)).await);
        }
        Err(message) => message,
    };

    let nav = Nav::new(MY_URLS, session.is_admin());
    // The update failure is what the user needs to see, even when the reload fails too.
    let record = match find_my_url(&state, &session, id).await {
        Ok(record) => record.ok_or(AppError::UrlNotFound(id))?,
        Err(_) => return Ok(Html(edit_unavailable_page(&nav, &message))),
    };

    Ok(Html(edit_page(
        &nav,
        &display_prefix(&state.short_base),
        &record,
        &payload.url,
        alias.as_deref().unwrap_or_default(),
        Some(&message),
    )))
}

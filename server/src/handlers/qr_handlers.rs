use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Extension,
};
use serde::Deserialize;
use skylapp_client::qr::{qr_target, render_svg, short_link};
use skylapp_client::normalize_alias;

use crate::error::AppError;
use crate::models::session::Session;
use crate::state::AppState;
use crate::views::{
    encode_component,
    qr::{qr_page, QrResult},
    Nav, Notice,
};

const QR_SIZE: u32 = 256;

#[derive(Deserialize)]
pub struct QrQuery {
    #[serde(default)]
    pub target: String,
}

pub async fn qr_code(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<QrQuery>,
) -> Html<String> {
    let nav = Nav::new("/dashboard/qr-code", session.is_admin());
    let target = query.target.trim();

    let Some(data) = qr_target(target, &state.short_base) else {
        return Html(qr_page(&nav, target, None, None));
    };

    match render_svg(&data, QR_SIZE) {
        Ok(svg) => {
            let download = if target.contains("://") {
                None
            } else {
                normalize_alias(target)
                    .map(|alias| format!("/dashboard/qr-code/{}", encode_component(&alias)))
            };
            let result = QrResult {
                data,
                svg,
                download,
            };
            Html(qr_page(&nav, target, Some(result), None))
        }
        Err(e) => {
            tracing::warn!("could not encode {} as QR code: {}", data, e);
            let notice = Notice::Error(format!("Could not generate QR code: {e}"));
            Html(qr_page(&nav, target, None, Some(notice)))
        }
    }
}

pub async fn qr_svg(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Response, AppError> {
    let alias = normalize_alias(&alias).ok_or(AppError::EmptyQrTarget)?;
    let svg = render_svg(&short_link(&state.short_base, &alias), QR_SIZE)?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("URL {0} was not found among your links")]
    UrlNotFound(i64),

    #[error("Nothing to encode")]
    EmptyQrTarget,

    #[error("Could not generate QR code: {0}")]
    Qr(#[from] skylapp_client::qr::QrError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UrlNotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmptyQrTarget => StatusCode::BAD_REQUEST,
            AppError::Qr(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::warn!("request failed with {}: {}", status, self);

        (status, Html(views::error_page(status.as_u16(), &self.to_string()))).into_response()
    }
}

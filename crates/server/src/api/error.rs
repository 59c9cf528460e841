use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::error::ApiError;
use thiserror::Error;
use tracing::debug;

/// Bodies the handlers could not decode. Every variant answers with an
/// `ApiError` JSON body.
#[derive(Debug, Error)]
pub(crate) enum RequestError {
    #[error("invalid form body: {0}")]
    FormBody(#[from] serde_html_form::de::Error),
    #[error("invalid json body: {}", .0.body_text())]
    JsonBody(#[from] JsonRejection),
}

impl RequestError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::FormBody(_) => StatusCode::BAD_REQUEST,
            Self::JsonBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, error = %self, "rejecting request body");
        (status, Json(ApiError::validation(self.to_string()))).into_response()
    }
}

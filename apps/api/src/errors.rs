use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, ApiError>`.
///
/// Every failure is reported to the caller as an HTTP 200 envelope with a
/// single `error` field. Upstream gateway failures embed the upstream status
/// and body verbatim; everything else reports its Display text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An upstream gateway answered with a non-2xx status.
    #[error("Status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Transport failure or response-decoding failure from reqwest.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// The uploaded bytes could not be parsed as a PDF document.
    #[error("{0}")]
    PdfExtract(String),

    #[error("missing file field in multipart upload")]
    MissingFile,

    #[error("unsupported post_type '{0}': expected 'article', 'update' or 'carousel'")]
    UnsupportedPostType(String),

    /// The chat completion response carried no choices.
    #[error("chat completion response contained no choices")]
    EmptyChoices,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!("request failed: {message}");

        (StatusCode::OK, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_embeds_status_and_body_verbatim() {
        let err = ApiError::Upstream {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Status 503: unavailable");
    }

    #[test]
    fn unsupported_post_type_names_the_offending_value() {
        let err = ApiError::UnsupportedPostType("poem".to_string());
        assert!(err.to_string().contains("'poem'"));
        assert!(err.to_string().contains("carousel"));
    }
}

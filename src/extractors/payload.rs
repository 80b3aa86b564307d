//! Read a payload from a JSON body, or from the query string when the request carries no JSON.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Query, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;

/// `Json<T>` for `Content-Type: application/json`, otherwise `Query<T>`.
/// Older clients send create arguments as query parameters.
#[derive(Clone, Debug)]
pub struct JsonOrQuery<T>(pub T);

/// `application/json` or any `application/<x>+json`, matching what `Json<T>` accepts.
fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.parse::<mime::Mime>().ok())
        .map(|m| {
            m.type_() == mime::APPLICATION
                && (m.subtype() == mime::JSON || m.suffix().map_or(false, |s| s == mime::JSON))
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(e.body_text())
                } else {
                    AppError::BadRequest(e.body_text())
                }
            })?;
            return Ok(JsonOrQuery(value));
        }
        let Query(value) = Query::<T>::try_from_uri(req.uri()).map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(JsonOrQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn with_content_type(ct: &str) -> Request {
        Request::builder()
            .header(CONTENT_TYPE, ct)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn recognizes_json_media_types() {
        for ct in [
            "application/json",
            "application/json; charset=utf-8",
            "application/merge-patch+json",
            "application/vnd.api+json",
        ] {
            assert!(is_json(&with_content_type(ct)), "{}", ct);
        }
    }

    #[test]
    fn other_media_types_use_the_query_string() {
        for ct in ["text/plain", "application/x-www-form-urlencoded", "text/json", "application/jsonl", "garbage"] {
            assert!(!is_json(&with_content_type(ct)), "{}", ct);
        }
        let bare = Request::builder().body(Body::empty()).unwrap();
        assert!(!is_json(&bare));
    }
}

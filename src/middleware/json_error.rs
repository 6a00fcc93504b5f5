use axum::{
    body::to_bytes,
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    payloads::{FieldErrors, NON_FIELD_ERRORS},
    response::{JsonApiResponse, log_app_error},
};

const MAX_REJECTION_BYTES: usize = 16 * 1024;

/// Rewrites plain-text rejections from the framework into the JSON envelope.
///
/// A body that parsed as JSON but did not fit the payload type (422 from the
/// `Json` extractor) is answered like any other failed validation: 400 with
/// the message under `non_field_errors`. Other statuses are kept as they are.
pub async fn json_error_middleware(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(response.headers()) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let message = match to_bytes(body, MAX_REJECTION_BYTES).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(_) => String::new(),
    };
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("Request failed").to_string()
    } else {
        message
    };

    let (status, app_error) = rejection_to_error(status, message);
    if status.is_server_error() {
        log_app_error(&app_error, status);
    }

    let mut envelope = JsonApiResponse::from_error(&app_error);
    envelope.status = status.as_u16();
    let mut rewritten = envelope.into_response();
    for (name, value) in &parts.headers {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rewritten.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rewritten
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let value = value.to_ascii_lowercase();
            value.contains("application/json") || value.contains("+json")
        })
        .unwrap_or(false)
}

fn rejection_to_error(status: StatusCode, message: String) -> (StatusCode, AppError) {
    let error = match status {
        StatusCode::UNPROCESSABLE_ENTITY => {
            return (
                StatusCode::BAD_REQUEST,
                FieldErrors::single(NON_FIELD_ERRORS, message).into(),
            );
        }
        StatusCode::UNAUTHORIZED => AppError::unauthorized(message),
        StatusCode::FORBIDDEN => AppError::forbidden(message),
        StatusCode::NOT_FOUND => AppError::not_found(message),
        StatusCode::CONFLICT => AppError::conflict(message),
        _ if status.is_client_error() => AppError::bad_request(message),
        _ => AppError::internal(message),
    };
    (status, error)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::rejection_to_error;
    use crate::error::AppError;

    #[test]
    fn unprocessable_body_becomes_non_field_validation_error() {
        let (status, err) = rejection_to_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid type: integer, expected a string".to_string(),
        );

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(matches!(err, AppError::Validation(errors) if errors.has("non_field_errors")));
    }

    #[test]
    fn unusual_client_status_is_kept() {
        let (status, err) =
            rejection_to_error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string());

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(matches!(err, AppError::BadRequest(message) if message == "Method Not Allowed"));
    }
}

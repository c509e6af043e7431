use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// The identity that was turned away by the admin gate, echoed back for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeniedIdentity {
    pub id: String,
    pub is_admin: bool,
    pub role: String,
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("Access denied. Admin privileges required.")]
    Forbidden(DeniedIdentity),

    #[error("{0}")]
    ValidationError(String),

    #[error("Validation error: {0}")]
    InvalidFields(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<DeniedIdentity>,
}

impl ErrorResponse {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
            user: None,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Forbidden(identity) => ErrorResponse {
                message: self.to_string(),
                details: None,
                user: Some(identity.clone()),
            },
            AppError::InvalidFields(details) => ErrorResponse {
                message: "Validation error".to_string(),
                details: Some(details.clone()),
                user: None,
            },
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                // Internal detail stays in the server log.
                log::error!("{}", self);
                ErrorResponse::message("Server error")
            }
            _ => ErrorResponse::message(self.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}
impl From<mongodb::bson::de::Error> for AppError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        AppError::InternalError(format!("BSON deserialization error: {}", err))
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidFields(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: AppError) -> serde_json::Value {
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::Unauthorized("test".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidFields("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::DatabaseError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_validation_message_is_forwarded() {
        let body = body_json(AppError::ValidationError("All fields are required".into())).await;
        assert_eq!(body["message"], "All fields are required");
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn test_invalid_fields_carry_details() {
        let body = body_json(AppError::InvalidFields("options: too many".into())).await;
        assert_eq!(body["message"], "Validation error");
        assert_eq!(body["details"], "options: too many");
    }

    #[actix_web::test]
    async fn test_database_error_detail_is_hidden() {
        let body = body_json(AppError::DatabaseError("connection refused on 10.0.0.4".into())).await;
        assert_eq!(body["message"], "Server error");
        assert!(!body.to_string().contains("10.0.0.4"));
    }

    #[actix_web::test]
    async fn test_forbidden_includes_identity_flags() {
        let body = body_json(AppError::Forbidden(DeniedIdentity {
            id: "abc".into(),
            is_admin: false,
            role: "user".into(),
        }))
        .await;

        assert_eq!(body["message"], "Access denied. Admin privileges required.");
        assert_eq!(body["user"]["id"], "abc");
        assert_eq!(body["user"]["isAdmin"], false);
        assert_eq!(body["user"]["role"], "user");
    }
}

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::login::errors::LoginError;

pub mod api_login;

/// `code` value of a successful response body.
pub const CODE_SUCCESS: u8 = 1;
/// `code` value of a failed response body.
pub const CODE_FAILURE: u8 = 0;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(message, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
}

impl ApiError {
    /// Map a login error onto the HTTP taxonomy.
    ///
    /// Faults are logged here and only here. With `expose_details` the fault
    /// text becomes the response message; otherwise the caller gets a
    /// reference id that appears in the log line.
    pub fn from_login_error(err: LoginError, expose_details: bool) -> Self {
        match err {
            LoginError::MissingCredentials => ApiError::BadRequest(err.to_string()),
            LoginError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            fault if expose_details => {
                tracing::error!(error = %fault, "Error en api_login");
                ApiError::InternalServerError(fault.to_string())
            }
            fault => {
                let reference = Uuid::new_v4();
                tracing::error!(error = %fault, reference = %reference, "Error en api_login");
                ApiError::InternalServerError(format!("Error interno (ref {})", reference))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorBody::new(message))).into_response()
    }
}

/// Success envelope: `code`, `message`, then the payload fields inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    code: u8,
    message: String,
    #[serde(flatten)]
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    code: u8,
    message: String,
}

impl ApiErrorBody {
    pub fn new(message: String) -> Self {
        Self {
            code: CODE_FAILURE,
            message,
        }
    }
}

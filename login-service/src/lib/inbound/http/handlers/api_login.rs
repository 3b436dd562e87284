use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::login::models::Credentials;
use crate::login::models::Identity;
use crate::login::models::LoginOutcome;
use crate::login::models::UserType;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Inicio de sesión exitoso";

pub async fn api_login(
    State(state): State<AppState>,
    body: Result<Json<ApiLoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<ApiLoginResponseData>, ApiError> {
    // An unreadable body carries no credentials.
    let body = body.map(|Json(body)| body).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Login body rejected");
        ApiLoginRequestBody::default()
    });

    let credentials = Credentials::new(
        body.username.unwrap_or_default(),
        body.password.unwrap_or_default(),
    )
    .map_err(|e| ApiError::from_login_error(e, state.expose_error_details))?;

    let outcome = state
        .login_service
        .login(credentials)
        .await
        .map_err(|e| ApiError::from_login_error(e, state.expose_error_details))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LOGIN_SUCCESS_MESSAGE,
        outcome.into(),
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiLoginRequestBody {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiLoginResponseData {
    pub token: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<i64>,
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
}

impl From<LoginOutcome> for ApiLoginResponseData {
    fn from(outcome: LoginOutcome) -> Self {
        let identity = &outcome.identity;
        let cliente_id = match identity {
            Identity::Client(client) => Some(client.id),
            Identity::Internal(_) => None,
        };

        Self {
            user_type: identity.user_type(),
            cliente_id,
            user: UserData {
                id: identity.id(),
                username: identity.username().to_string(),
            },
            token: outcome.token,
        }
    }
}

//! HTTP handlers for the three identity operations.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::directory::AccountSummary;
use crate::error::ApiError;
use crate::token::TOKEN_TTL_SECS;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: AccountSummary,
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: AccountSummary,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<AccountSummary>,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(request) = payload.map_err(reject_body)?;
    info!(username = %request.username, "registration request received");

    let account = state
        .directory
        .register(&request.username, &request.password)
        .await?;
    let token = state.tokens.issue(&account)?;

    info!(username = %account.username, id = account.id, "account created");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "user registered successfully".to_string(),
            user: AccountSummary {
                id: account.id,
                username: account.username,
            },
            token,
            expires_in: TOKEN_TTL_SECS,
        }),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;
    info!(username = %request.username, "login request received");

    let account = state
        .directory
        .verify(&request.username, &request.password)
        .await?;
    let token = state.tokens.issue(&account)?;

    Ok(Json(LoginResponse {
        success: true,
        message: "login successful".to_string(),
        user: AccountSummary {
            id: account.id,
            username: account.username,
        },
        token,
    }))
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<UsersResponse> {
    let users = state.directory.list().await;
    Json(UsersResponse {
        success: true,
        users,
    })
}

/// Collapse body extraction failures into a 400 with the flat error shape.
/// Missing fields surface as a data error; anything else is invalid JSON.
fn reject_body(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(_) => ApiError::MalformedInput {
            message: "username and password fields are required".to_string(),
        },
        _ => ApiError::MalformedInput {
            message: "request body must be valid JSON".to_string(),
        },
    }
}

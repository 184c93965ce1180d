pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod token;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use directory::AccountDirectory;
use handlers::{list_users, login, register};
use token::TokenIssuer;

pub const SERVICE_NAME: &str = "identity-svc";

pub struct AppState {
    pub directory: AccountDirectory,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(signing_secret: String) -> Self {
        Self {
            directory: AccountDirectory::new(),
            tokens: TokenIssuer::new(signing_secret),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users", get(list_users))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

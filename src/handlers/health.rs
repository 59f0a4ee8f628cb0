use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::env;

/// Longest internal error text the diagnostic route echoes back.
const MAX_STATUS_LEN: usize = 50;

pub async fn read_root() -> impl IntoResponse {
    Json(json!({
        "message": "Gov Hospital API running",
        "service": "hospital-directory-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn degraded(prefix: &str, err: impl std::fmt::Display) -> String {
    let msg: String = err.to_string().chars().take(MAX_STATUS_LEN).collect();
    format!("{}: {}", prefix, msg)
}

fn presence(key: &str) -> &'static str {
    if env::var(key).is_ok() {
        "set"
    } else {
        "not set"
    }
}

/// Connectivity diagnostic. Never fails the request: every internal failure
/// degrades into a status string in the 200 body.
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    let mut response = json!({
        "backend": "running",
        "database": "not available",
        "connection_status": "not connected",
        "database_url": presence("DATABASE_URL"),
        "database_name": presence("DATABASE_NAME"),
        "collections": [],
    });

    match &state.db {
        Some(db) => match db.health_check().await {
            Ok(()) => {
                response["connection_status"] = json!("connected");
                match db.collection_names().await {
                    Ok(mut names) => {
                        names.truncate(10);
                        response["collections"] = json!(names);
                        response["database"] = json!("connected and working");
                    }
                    Err(e) => {
                        response["database"] = json!(degraded("connected but error", e));
                    }
                }
            }
            Err(e) => {
                response["database"] = json!(degraded("error", e));
            }
        },
        None => {
            response["database"] = json!("not initialized");
        }
    }

    Json(response)
}

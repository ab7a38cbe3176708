//! Task Endpoints
//!
//! Authenticated CRUD against /tasks. Each call resolves the bearer
//! token through the session store; components never touch storage.

use serde::Serialize;

use super::{encode, send, send_json, ApiError};
use crate::models::{Task, TaskStatus};
use crate::session;

/// Create/update payload; the id is always server-assigned
#[derive(Serialize)]
pub struct TaskPayload<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: TaskStatus,
}

fn bearer() -> Result<String, ApiError> {
    session::token().ok_or(ApiError::Unauthorized)
}

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let token = bearer()?;
    send_json("GET", "/tasks", Some(&token), None).await
}

pub async fn get_task(id: u32) -> Result<Task, ApiError> {
    let token = bearer()?;
    send_json("GET", &format!("/tasks/{id}"), Some(&token), None).await
}

pub async fn create_task(payload: &TaskPayload<'_>) -> Result<Task, ApiError> {
    let token = bearer()?;
    let body = encode(payload)?;
    send_json("POST", "/tasks", Some(&token), Some(body)).await
}

pub async fn update_task(id: u32, payload: &TaskPayload<'_>) -> Result<Task, ApiError> {
    let token = bearer()?;
    let body = encode(payload)?;
    send_json("PUT", &format!("/tasks/{id}"), Some(&token), Some(body)).await
}

pub async fn delete_task(id: u32) -> Result<(), ApiError> {
    let token = bearer()?;
    // 204 has no body to parse
    send("DELETE", &format!("/tasks/{id}"), Some(&token), None)
        .await
        .map(|_| ())
}

//! Auth Endpoints
//!
//! Login and registration, the only calls made without a bearer token.

use serde::{Deserialize, Serialize};

use super::{encode, send, send_json, ApiError};

// ========================
// Payload Structs
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

// ========================
// Endpoints
// ========================

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = encode(&LoginArgs { email, password })?;
    send_json("POST", "/auth/login", None, Some(body)).await
}

pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let body = encode(&RegisterArgs {
        username,
        email,
        password,
    })?;
    send("POST", "/auth/register", None, Some(body))
        .await
        .map(|_| ())
}

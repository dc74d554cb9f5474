use contracts::domain::a001_user::{User, UserCreate, UserUpdate};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, String> {
    let response = Request::get(&format!("{}/user", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch users").await);
    }

    response
        .json::<Vec<User>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new user
pub async fn create_user(dto: UserCreate) -> Result<(), String> {
    let response = Request::post(&format!("{}/user", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "create user").await);
    }

    Ok(())
}

/// Update user
pub async fn update_user(id: i64, dto: UserUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/user/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update user").await);
    }

    Ok(())
}

/// Delete user
pub async fn delete_user(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/user/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete user").await);
    }

    Ok(())
}

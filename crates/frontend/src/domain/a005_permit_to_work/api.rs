use contracts::domain::a005_permit_to_work::{
    PermitCreate, PermitDetail, PermitReject, PermitUpdate,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

pub async fn fetch_permits() -> Result<Vec<PermitDetail>, String> {
    let response = Request::get(&format!("{}/permittowork", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch permits").await);
    }

    response
        .json::<Vec<PermitDetail>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_permit(id: i64) -> Result<PermitDetail, String> {
    let response = Request::get(&format!("{}/permittowork/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch permit").await);
    }

    response
        .json::<PermitDetail>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_permit(dto: PermitCreate) -> Result<(), String> {
    let response = Request::post(&format!("{}/permittowork", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "create permit").await);
    }

    Ok(())
}

pub async fn update_permit(id: i64, dto: PermitUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/permits/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update permit").await);
    }

    Ok(())
}

pub async fn delete_permit(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/permits/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete permit").await);
    }

    Ok(())
}

/// Approve a pending permit.
pub async fn approve_permit(id: i64) -> Result<(), String> {
    let response = Request::post(&format!("{}/permits/{}/approve", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "approve permit").await);
    }

    Ok(())
}

/// Reject a pending permit with a reason.
pub async fn reject_permit(id: i64, reason: String) -> Result<(), String> {
    let dto = PermitReject { reason };
    let response = Request::post(&format!("{}/permits/{}/reject", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "reject permit").await);
    }

    Ok(())
}

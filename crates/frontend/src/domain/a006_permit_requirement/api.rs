use contracts::domain::a006_permit_requirement::{
    PermitRequirement, PermitRequirementCreate, PermitRequirementUpdate,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

pub async fn fetch_requirements() -> Result<Vec<PermitRequirement>, String> {
    let response = Request::get(&format!("{}/permitrequirements", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch permit requirements").await);
    }

    response
        .json::<Vec<PermitRequirement>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Look up the requirement for a work type.
pub async fn fetch_requirement_by_work_type(work_type: &str) -> Result<PermitRequirement, String> {
    let response = Request::get(&format!(
        "{}/permitrequirements/work-type/{}",
        api_base(),
        urlencoding::encode(work_type)
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch permit requirement by work type").await);
    }

    response
        .json::<PermitRequirement>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_requirement(dto: PermitRequirementCreate) -> Result<(), String> {
    let response = Request::post(&format!("{}/permitrequirements", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "create permit requirement").await);
    }

    Ok(())
}

pub async fn update_requirement(id: i64, dto: PermitRequirementUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/permitrequirements/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update permit requirement").await);
    }

    Ok(())
}

pub async fn delete_requirement(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/permitrequirements/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete permit requirement").await);
    }

    Ok(())
}

use contracts::domain::a007_document_requirement::{
    DocumentRequirement, DocumentRequirementCreate, DocumentRequirementUpdate,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

pub async fn fetch_requirements() -> Result<Vec<DocumentRequirement>, String> {
    let response = Request::get(&format!("{}/documentrq", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch document requirements").await);
    }

    response
        .json::<Vec<DocumentRequirement>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_requirement(dto: DocumentRequirementCreate) -> Result<(), String> {
    let response = Request::post(&format!("{}/documentrq", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "create document requirement").await);
    }

    Ok(())
}

pub async fn update_requirement(id: i64, dto: DocumentRequirementUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/documentrq/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update document requirement").await);
    }

    Ok(())
}

pub async fn delete_requirement(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/documentrq/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete document requirement").await);
    }

    Ok(())
}

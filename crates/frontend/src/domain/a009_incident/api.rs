use contracts::domain::a009_incident::{Incident, IncidentCreate, IncidentUpdate};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

pub async fn fetch_incidents() -> Result<Vec<Incident>, String> {
    let response = Request::get(&format!("{}/incidentreport", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch incidents").await);
    }

    response
        .json::<Vec<Incident>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_incident(dto: IncidentCreate) -> Result<(), String> {
    let response = Request::post(&format!("{}/incidentreport", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "create incident").await);
    }

    Ok(())
}

pub async fn update_incident(id: i64, dto: IncidentUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/incidentreport/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update incident").await);
    }

    Ok(())
}

pub async fn delete_incident(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/incidentreport/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete incident").await);
    }

    Ok(())
}

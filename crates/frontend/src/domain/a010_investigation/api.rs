use contracts::domain::a009_incident::IncidentInvestigation;
use contracts::domain::a010_investigation::{
    HseOfficerOption, IncidentOption, Investigation, InvestigationCreate, InvestigationUpdate,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

pub async fn fetch_investigations() -> Result<Vec<Investigation>, String> {
    let response = Request::get(&format!("{}/investigation", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch investigations").await);
    }

    response
        .json::<Vec<Investigation>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Investigation summary for one incident, used to enrich the incident
/// list. 404 (no investigation yet) surfaces as Err and is treated as
/// "none" by the caller.
pub async fn fetch_investigation_for_incident(
    incident_id: i64,
) -> Result<IncidentInvestigation, String> {
    let response = Request::get(&format!(
        "{}/investigation/incident/{}",
        api_base(),
        incident_id
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch investigation").await);
    }

    response
        .json::<IncidentInvestigation>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Incident dropdown options for the create dialog: open incidents only.
pub async fn fetch_incident_options() -> Result<Vec<IncidentOption>, String> {
    let response = Request::get(&format!("{}/incidentreport?status=open", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch incident options").await);
    }

    let incidents = response
        .json::<Vec<contracts::domain::a009_incident::Incident>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(incidents
        .into_iter()
        .map(|i| IncidentOption {
            incident_id: i.incident_id,
            incident_title: i.category,
            incident_number: i.incident_number,
        })
        .collect())
}

/// HSE officer dropdown options for the create dialog: users with the
/// HSE role.
pub async fn fetch_officer_options() -> Result<Vec<HseOfficerOption>, String> {
    let response = Request::get(&format!("{}/user?role=hse", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch HSE officers").await);
    }

    let users = response
        .json::<Vec<contracts::domain::a001_user::User>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(users
        .into_iter()
        .map(|u| HseOfficerOption {
            hse_officer_id: u.user_id,
            name: u.name,
            email: u.email,
        })
        .collect())
}

pub async fn create_investigation(dto: InvestigationCreate) -> Result<(), String> {
    let response = Request::post(&format!("{}/investigation", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "create investigation").await);
    }

    Ok(())
}

pub async fn update_investigation(id: i64, dto: InvestigationUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/investigation/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update investigation").await);
    }

    Ok(())
}

/// Close an investigation; the backend stamps the close date.
pub async fn close_investigation(id: i64) -> Result<(), String> {
    let response = Request::patch(&format!("{}/investigation/{}/close", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "close investigation").await);
    }

    Ok(())
}

pub async fn delete_investigation(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/investigation/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete investigation").await);
    }

    Ok(())
}

use contracts::domain::a011_approval::{ApprovalUpdate, ApprovalWithPermit};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

/// All approvals joined with their permit summaries.
pub async fn fetch_approvals_with_permit() -> Result<Vec<ApprovalWithPermit>, String> {
    let response = Request::get(&format!("{}/approvals/with-permit", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch approvals").await);
    }

    response
        .json::<Vec<ApprovalWithPermit>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Approve via the dedicated PATCH route. The optional comment goes as
/// a bare JSON string body.
pub async fn approve(id: i64, comment: Option<String>) -> Result<(), String> {
    decide(id, "approve", comment).await
}

/// Reject via the dedicated PATCH route.
pub async fn reject(id: i64, comment: Option<String>) -> Result<(), String> {
    decide(id, "reject", comment).await
}

async fn decide(id: i64, action: &str, comment: Option<String>) -> Result<(), String> {
    let builder = Request::patch(&format!("{}/approvals/{}/{}", api_base(), id, action));

    let request = match &comment {
        Some(text) => builder
            .json(text)
            .map_err(|e| format!("Failed to serialize request: {}", e))?,
        None => builder
            .build()
            .map_err(|e| format!("Failed to build request: {}", e))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, &format!("{} approval", action)).await);
    }

    Ok(())
}

/// Full decision update (used for "set pending" and the edit dialog).
/// The backend stamps `decisionDate` whenever the decision changes.
pub async fn update(id: i64, dto: ApprovalUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/approvals/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update approval").await);
    }

    Ok(())
}

pub async fn delete(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/approvals/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete approval").await);
    }

    Ok(())
}

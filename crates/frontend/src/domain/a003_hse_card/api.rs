use contracts::domain::a003_hse_card::{HseCard, HseCardCreate, HseCardRenew, HseCardUpdate};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

pub async fn fetch_cards() -> Result<Vec<HseCard>, String> {
    let response = Request::get(&format!("{}/hsecards", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch HSE cards").await);
    }

    response
        .json::<Vec<HseCard>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_card(dto: HseCardCreate) -> Result<(), String> {
    let response = Request::post(&format!("{}/hsecards", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "create HSE card").await);
    }

    Ok(())
}

pub async fn update_card(id: i64, dto: HseCardUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/hsecards/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update HSE card").await);
    }

    Ok(())
}

pub async fn delete_card(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/hsecards/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete HSE card").await);
    }

    Ok(())
}

/// Renew an expired card with a new expiry date.
pub async fn renew_card(id: i64, new_expiry_date: String) -> Result<(), String> {
    let dto = HseCardRenew { expired_date: new_expiry_date };
    let response = Request::post(&format!("{}/hsecards/{}/renew", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "renew HSE card").await);
    }

    Ok(())
}

use contracts::domain::a002_card_type::{CardType, CardTypeCreate, CardTypeUpdate};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

pub async fn fetch_card_types() -> Result<Vec<CardType>, String> {
    let response = Request::get(&format!("{}/cardtype", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch card types").await);
    }

    response
        .json::<Vec<CardType>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_card_type(dto: CardTypeCreate) -> Result<(), String> {
    let response = Request::post(&format!("{}/cardtype", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "create card type").await);
    }

    Ok(())
}

pub async fn update_card_type(id: i64, dto: CardTypeUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/cardtype/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update card type").await);
    }

    Ok(())
}

pub async fn delete_card_type(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/cardtype/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete card type").await);
    }

    Ok(())
}

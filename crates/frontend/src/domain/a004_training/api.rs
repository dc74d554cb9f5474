use contracts::domain::a004_training::{Training, TrainingCreate, TrainingUpdate};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, response_error};

pub async fn fetch_trainings() -> Result<Vec<Training>, String> {
    let response = Request::get(&format!("{}/trainings", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch trainings").await);
    }

    response
        .json::<Vec<Training>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_training(dto: TrainingCreate) -> Result<(), String> {
    let response = Request::post(&format!("{}/trainings", api_base()))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "create training").await);
    }

    Ok(())
}

pub async fn update_training(id: i64, dto: TrainingUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/trainings/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update training").await);
    }

    Ok(())
}

pub async fn delete_training(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/trainings/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete training").await);
    }

    Ok(())
}

use contracts::domain::a008_user_document::UserDocument;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::shared::api_utils::{api_base, response_error};

pub async fn fetch_documents() -> Result<Vec<UserDocument>, String> {
    let response = Request::get(&format!("{}/userdocument", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "fetch user documents").await);
    }

    response
        .json::<Vec<UserDocument>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Multipart payload for create/update: the file part wins over the URL
/// field when both are set.
pub struct UploadPayload {
    pub user_id: i64,
    pub document_requirement_id: i64,
    pub file: Option<web_sys::File>,
    pub file_url: Option<String>,
}

fn build_form_data(payload: &UploadPayload) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form.append_with_str("userId", &payload.user_id.to_string())
        .map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form.append_with_str(
        "documentRequirementId",
        &payload.document_requirement_id.to_string(),
    )
    .map_err(|e| format!("Failed to build form data: {:?}", e))?;

    if let Some(file) = &payload.file {
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| format!("Failed to attach file: {:?}", e))?;
    } else if let Some(url) = &payload.file_url {
        form.append_with_str("fileURL", url)
            .map_err(|e| format!("Failed to build form data: {:?}", e))?;
    }

    Ok(form)
}

/// Upload a new document (multipart form-data).
pub async fn create_document(payload: UploadPayload) -> Result<(), String> {
    let form = build_form_data(&payload)?;
    let response = Request::post(&format!("{}/userdocument", api_base()))
        .body(JsValue::from(form))
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "upload document").await);
    }

    Ok(())
}

/// Replace an existing document (multipart form-data). Omitting both
/// file and URL keeps the stored file.
pub async fn update_document(id: i64, payload: UploadPayload) -> Result<(), String> {
    let form = build_form_data(&payload)?;
    let response = Request::put(&format!("{}/userdocument/{}", api_base(), id))
        .body(JsValue::from(form))
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "update document").await);
    }

    Ok(())
}

pub async fn delete_document(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/userdocument/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "delete document").await);
    }

    Ok(())
}

/// Fetch the stored file as raw bytes for a browser download.
pub async fn download_document(id: i64) -> Result<Vec<u8>, String> {
    let response = Request::get(&format!("{}/userdocument/download/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response, "download document").await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read file body: {}", e))
}

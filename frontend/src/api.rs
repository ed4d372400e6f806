use crate::config;
use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{ErrorBody, ProcessError, ProcessResponse};
use web_sys::FormData;

/// Uploads `file` and waits for the processed images. One attempt, no retry.
pub async fn upload_and_process(file: &GlooFile) -> Result<ProcessResponse, ProcessError> {
    let form_data = FormData::new()
        .map_err(|e| ProcessError::Network(format!("failed to create form data: {:?}", e)))?;
    form_data
        .append_with_blob_and_filename(config::UPLOAD_FIELD, file.as_ref(), &file.name())
        .map_err(|e| ProcessError::Network(format!("failed to attach file: {:?}", e)))?;

    let url = config::process_url();
    log::info!("Uploading '{}' ({} bytes) to {}", file.name(), file.size(), url);

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| ProcessError::Network(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        error!(format!("Fetch error: {:?}", e));
        ProcessError::Network(e.to_string())
    })?;

    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        let error_field = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);
        log::error!("Server error: {} - {}", status, body);
        return Err(ProcessError::from_server(status, &status_text, error_field));
    }

    response
        .json::<ProcessResponse>()
        .await
        .map_err(|e| ProcessError::Decode(format!("Failed to parse response: {}", e)))
}

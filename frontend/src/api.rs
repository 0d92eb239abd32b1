//! Calls to the school backend.
//!
//! Both functions collapse every failure into `ApiError`; callers decide what the user sees.

use common::config::ApiConfig;
use common::error::ApiError;
use common::model::file::SelectedFile;
use common::model::school::SchoolRecord;
use common::submission::{CreateSchoolRequest, PartValue};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::components::schools::file::PickedFile;

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Copies the payload into a browser `FormData`, keeping part order.
fn to_form_data(request: &CreateSchoolRequest<PickedFile>) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(js_error)?;
    for part in request.payload.parts() {
        let appended = match &part.value {
            PartValue::Text(value) => form_data.append_with_str(part.name, value),
            PartValue::File(file) => {
                form_data.append_with_blob_and_filename(part.name, file.as_file(), &file.name())
            }
        };
        appended.map_err(js_error)?;
    }
    Ok(form_data)
}

/// Sends one `POST` with the multipart body. Any non-2xx status, or a body that is not JSON,
/// counts as a failure.
pub async fn create_school(request: CreateSchoolRequest<PickedFile>) -> Result<(), ApiError> {
    let body = to_form_data(&request)?;
    let response = Request::post(&request.url)
        .body(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    ApiError::check_status(response.status())?;
    response
        .json::<serde_json::Value>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(())
}

/// Fetches every registered school.
pub async fn fetch_schools(config: &ApiConfig) -> Result<Vec<SchoolRecord>, ApiError> {
    let response = Request::get(&config.schools_url())
        .send()
        .await
        .map_err(transport)?;

    ApiError::check_status(response.status())?;
    response
        .json::<Vec<SchoolRecord>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

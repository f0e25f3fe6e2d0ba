use lambda_http::http::StatusCode;
use lambda_http::{tracing, Error, Response};
use serde::Serialize;

pub fn empty_response(status: &StatusCode) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .body("".to_string())
        .map_err(Box::new)?;

    Ok(response)
}

pub fn json_response(
    status: &StatusCode,
    body: &impl Serialize,
) -> Result<Response<String>, Error> {
    let json = match serde_json::to_string(body) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize response body: {:?}", e);
            return server_error_response();
        }
    };

    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(json)
        .map_err(Box::new)?;

    Ok(response)
}

pub fn server_error_response() -> Result<Response<String>, Error> {
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    let response = Response::builder()
        .status(status)
        .body(status.canonical_reason().unwrap_or_default().to_string())
        .map_err(Box::new)?;

    Ok(response)
}

//! HTTP client for the processing server (browser only).

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use super::{ApiError, FilterUpdate, OrderUpdate, ServerReply, UploadReply};

/// `POST /upload` with the file as multipart field `file`.
pub async fn upload(url: &str, file: &File) -> Result<UploadReply, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::network(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::network(format!("{e:?}")))?;

    let request = Request::post(url).body(form).map_err(ApiError::network)?;
    read_reply(request.send().await.map_err(ApiError::network)?).await
}

/// `POST /filter/update` with every filter's state.
pub async fn update_filters(url: &str, body: &FilterUpdate) -> Result<ServerReply, ApiError> {
    let request = Request::post(url).json(body).map_err(ApiError::network)?;
    read_reply(request.send().await.map_err(ApiError::network)?).await
}

/// `POST /filter/order` with the new order.
pub async fn update_order(url: &str, body: &OrderUpdate) -> Result<ServerReply, ApiError> {
    let request = Request::post(url).json(body).map_err(ApiError::network)?;
    read_reply(request.send().await.map_err(ApiError::network)?).await
}

/// `POST /filter/reset` with form field `fileName`.
pub async fn reset_filters(url: &str, file_name: &str) -> Result<ServerReply, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::network(format!("{e:?}")))?;
    form.append_with_str("fileName", file_name)
        .map_err(|e| ApiError::network(format!("{e:?}")))?;

    let request = Request::post(url).body(form).map_err(ApiError::network)?;
    read_reply(request.send().await.map_err(ApiError::network)?).await
}

/// `DELETE /image/{name}`.
pub async fn discard(url: &str) -> Result<ServerReply, ApiError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(ApiError::network)?;
    read_reply(response).await
}

/// Decode a `{success, ...}` body.
///
/// Error statuses that still carry a JSON reply are returned as that reply so
/// the server's message reaches the user.
async fn read_reply<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(ApiError::network)?;
    match serde_json::from_str(&text) {
        Ok(reply) => Ok(reply),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Status { status }),
        Err(e) => Err(ApiError::decode(e)),
    }
}

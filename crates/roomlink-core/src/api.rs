//! HTTP client for the building-management API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::ApiError;
use crate::types::Device;

/// Seam between the operation layer and the remote API.
///
/// The reqwest-backed [`ApiClient`] is the production implementation;
/// tests substitute an in-memory mock so no operation logic ever needs
/// a live server.
#[async_trait]
pub trait BuildingApi: Send + Sync {
    /// `GET /devices` - list all devices.
    async fn list_devices(&self) -> Result<Vec<Device>, ApiError>;

    /// `GET /devices/{uuid}` - fetch one device.
    async fn get_device(&self, uuid: &str) -> Result<Device, ApiError>;

    /// `POST /rooms/{roomUuid}/devices` - associate a device with a room.
    async fn register_device(&self, room_uuid: &str, device_uuid: &str) -> Result<(), ApiError>;
}

/// Reqwest-backed API client bound to a base URL.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with the given base URL and per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|source| ApiError::Request {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }

        response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl BuildingApi for ApiClient {
    async fn list_devices(&self) -> Result<Vec<Device>, ApiError> {
        self.get_json("/devices").await
    }

    async fn get_device(&self, uuid: &str) -> Result<Device, ApiError> {
        self.get_json(&format!("/devices/{}", uuid)).await
    }

    async fn register_device(&self, room_uuid: &str, device_uuid: &str) -> Result<(), ApiError> {
        let path = format!("/rooms/{}/devices", room_uuid);

        let response = self
            .client
            .post(self.url(&path))
            .json(&json!({ "uuid": device_uuid }))
            .send()
            .await
            .map_err(|source| ApiError::Request {
                path: path.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status, path });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:3000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url("/devices"), "http://localhost:3000/devices");
    }

    #[test]
    fn url_joins_path_verbatim() {
        let client = ApiClient::new("http://api.example", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.url("/rooms/abc/devices"),
            "http://api.example/rooms/abc/devices"
        );
    }
}

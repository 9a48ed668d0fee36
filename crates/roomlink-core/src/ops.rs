//! Operation layer: the three building-API commands.
//!
//! Each operation is a linear validate -> fetch -> (decide) -> mutate
//! sequence over a [`BuildingApi`]. Operations return data instead of
//! printing, so front-ends decide how to present results.

use crate::api::BuildingApi;
use crate::error::{Result, ValidationError};
use crate::validate::is_valid_uuid;

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The device already had the target room; no write was issued.
    AlreadyRegistered,
    /// The device was associated with the room.
    Registered,
}

/// Count all devices known to the API.
pub async fn device_count(api: &dyn BuildingApi) -> Result<usize> {
    let devices = api.list_devices().await?;
    Ok(devices.len())
}

/// List UUIDs of devices whose response time strictly exceeds
/// `threshold` milliseconds, in the order the API returned them.
///
/// The threshold must be finite and non-negative; otherwise no network
/// call is made.
pub async fn timeout_devices(api: &dyn BuildingApi, threshold: f64) -> Result<Vec<String>> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ValidationError::InvalidThreshold.into());
    }

    let devices = api.list_devices().await?;

    Ok(devices
        .into_iter()
        .filter(|device| device.response_time > threshold)
        .map(|device| device.uuid)
        .collect())
}

/// Idempotently ensure a device is associated with a room.
///
/// The device UUID is validated first; if it fails, the room UUID is
/// not checked and no API call is made. A device already in the target
/// room short-circuits without issuing a write.
pub async fn register_device(
    api: &dyn BuildingApi,
    device_uuid: &str,
    room_uuid: &str,
) -> Result<RegisterOutcome> {
    if !is_valid_uuid(device_uuid) {
        return Err(ValidationError::InvalidDeviceUuid.into());
    }
    if !is_valid_uuid(room_uuid) {
        return Err(ValidationError::InvalidRoomUuid.into());
    }

    let device = api.get_device(device_uuid).await?;

    if device.room.as_ref().is_some_and(|room| room.uuid == room_uuid) {
        return Ok(RegisterOutcome::AlreadyRegistered);
    }

    api.register_device(room_uuid, device_uuid).await?;

    Ok(RegisterOutcome::Registered)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{ApiError, CoreError};
    use crate::types::{Device, Room};

    const DEVICE_UUID: &str = "123e4567-e89b-12d3-a456-426614174000";
    const ROOM_UUID: &str = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee";
    const OTHER_ROOM_UUID: &str = "ffffffff-0000-1111-2222-333333333333";

    /// In-memory API double that records every call it receives.
    struct MockApi {
        devices: Vec<Device>,
        calls: Mutex<Vec<String>>,
    }

    impl MockApi {
        fn new(devices: Vec<Device>) -> Self {
            Self {
                devices,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl BuildingApi for MockApi {
        async fn list_devices(&self) -> std::result::Result<Vec<Device>, ApiError> {
            self.record("GET /devices".to_string());
            Ok(self.devices.clone())
        }

        async fn get_device(&self, uuid: &str) -> std::result::Result<Device, ApiError> {
            self.record(format!("GET /devices/{}", uuid));
            self.devices
                .iter()
                .find(|d| d.uuid == uuid)
                .cloned()
                .ok_or_else(|| ApiError::Status {
                    status: reqwest::StatusCode::NOT_FOUND,
                    path: format!("/devices/{}", uuid),
                })
        }

        async fn register_device(
            &self,
            room_uuid: &str,
            device_uuid: &str,
        ) -> std::result::Result<(), ApiError> {
            self.record(format!(
                "POST /rooms/{}/devices uuid={}",
                room_uuid, device_uuid
            ));
            Ok(())
        }
    }

    fn device(uuid: &str, response_time: f64, room: Option<&str>) -> Device {
        Device {
            uuid: uuid.to_string(),
            response_time,
            room: room.map(|r| Room {
                uuid: r.to_string(),
            }),
        }
    }

    fn assert_validation(result: CoreError, expected: ValidationError) {
        match result {
            CoreError::Validation(e) => assert_eq!(e, expected),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn device_count_empty_collection() {
        let api = MockApi::new(vec![]);
        assert_eq!(device_count(&api).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn device_count_reports_cardinality() {
        let api = MockApi::new(vec![
            device("a", 1.0, None),
            device("b", 2.0, None),
            device("c", 3.0, None),
        ]);
        assert_eq!(device_count(&api).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn timeout_filter_is_strictly_greater() {
        let api = MockApi::new(vec![device("a", 0.0, None), device("b", 1.0, None)]);
        let timed_out = timeout_devices(&api, 0.0).await.unwrap();
        assert_eq!(timed_out, vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn timeout_preserves_api_order() {
        let api = MockApi::new(vec![
            device("z", 50.0, None),
            device("a", 40.0, None),
            device("m", 60.0, None),
        ]);
        let timed_out = timeout_devices(&api, 30.0).await.unwrap();
        assert_eq!(timed_out, vec!["z", "a", "m"]);
    }

    #[tokio::test]
    async fn negative_threshold_makes_no_network_call() {
        let api = MockApi::new(vec![device("a", 10.0, None)]);
        let err = timeout_devices(&api, -1.0).await.unwrap_err();
        assert_validation(err, ValidationError::InvalidThreshold);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn nan_threshold_is_rejected() {
        let api = MockApi::new(vec![]);
        let err = timeout_devices(&api, f64::NAN).await.unwrap_err();
        assert_validation(err, ValidationError::InvalidThreshold);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn no_devices_above_threshold_yields_empty_list() {
        let api = MockApi::new(vec![device("a", 5.0, None), device("b", 10.0, None)]);
        let timed_out = timeout_devices(&api, 10.0).await.unwrap();
        assert!(timed_out.is_empty());
    }

    #[tokio::test]
    async fn register_invalid_device_uuid_short_circuits() {
        let api = MockApi::new(vec![]);
        let err = register_device(&api, "not-a-uuid", "also-bad")
            .await
            .unwrap_err();
        // Device UUID is checked first; the room UUID never gets looked at.
        assert_validation(err, ValidationError::InvalidDeviceUuid);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn register_invalid_room_uuid_makes_no_api_call() {
        let api = MockApi::new(vec![]);
        let err = register_device(&api, DEVICE_UUID, "not-a-uuid")
            .await
            .unwrap_err();
        assert_validation(err, ValidationError::InvalidRoomUuid);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn register_already_in_room_issues_no_write() {
        let api = MockApi::new(vec![device(DEVICE_UUID, 10.0, Some(ROOM_UUID))]);
        let outcome = register_device(&api, DEVICE_UUID, ROOM_UUID).await.unwrap();
        assert_eq!(outcome, RegisterOutcome::AlreadyRegistered);
        assert_eq!(api.calls(), vec![format!("GET /devices/{}", DEVICE_UUID)]);
    }

    #[tokio::test]
    async fn register_unassigned_device_posts_once() {
        let api = MockApi::new(vec![device(DEVICE_UUID, 10.0, None)]);
        let outcome = register_device(&api, DEVICE_UUID, ROOM_UUID).await.unwrap();
        assert_eq!(outcome, RegisterOutcome::Registered);
        assert_eq!(
            api.calls(),
            vec![
                format!("GET /devices/{}", DEVICE_UUID),
                format!("POST /rooms/{}/devices uuid={}", ROOM_UUID, DEVICE_UUID),
            ]
        );
    }

    #[tokio::test]
    async fn register_moves_device_from_other_room() {
        let api = MockApi::new(vec![device(DEVICE_UUID, 10.0, Some(OTHER_ROOM_UUID))]);
        let outcome = register_device(&api, DEVICE_UUID, ROOM_UUID).await.unwrap();
        assert_eq!(outcome, RegisterOutcome::Registered);
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn register_unknown_device_surfaces_fetch_error() {
        let api = MockApi::new(vec![]);
        let err = register_device(&api, DEVICE_UUID, ROOM_UUID).await.unwrap_err();
        match err {
            CoreError::Api(ApiError::Status { status, .. }) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
            }
            other => panic!("expected status error, got {:?}", other),
        }
        // Fetch failed, so no registration was attempted.
        assert_eq!(api.calls().len(), 1);
    }
}

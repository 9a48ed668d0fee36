//! Domain types mirrored from the building-management API.

use serde::{Deserialize, Serialize};

/// A monitored device as reported by the API.
///
/// Owned by the remote API; the client only reads and writes through
/// API calls and never holds durable state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    pub uuid: String,

    /// Last measured response time in milliseconds.
    #[serde(rename = "responseTime")]
    pub response_time: f64,

    /// Room the device is registered in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
}

/// A location grouping entity identified by UUID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub uuid: String,
}

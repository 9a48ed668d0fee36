//! JSON-formatted output for CLI.

use serde_json::json;

use super::OutputFormatter;
use roomlink_core::RegisterOutcome;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_version(&self, name: &str, version: &str) -> String {
        Self::to_json(&json!({
            "name": name,
            "version": version
        }))
    }

    fn format_device_count(&self, count: usize) -> String {
        Self::to_json(&json!({ "deviceCount": count }))
    }

    fn format_timed_out(&self, uuids: &[String]) -> String {
        Self::to_json(&json!({
            "timedOutDevices": uuids,
            "count": uuids.len()
        }))
    }

    fn format_register(
        &self,
        outcome: &RegisterOutcome,
        device_uuid: &str,
        room_uuid: &str,
    ) -> String {
        let status = match outcome {
            RegisterOutcome::AlreadyRegistered => "already-registered",
            RegisterOutcome::Registered => "registered",
        };
        Self::to_json(&json!({
            "device": device_uuid,
            "room": room_uuid,
            "status": status
        }))
    }
}

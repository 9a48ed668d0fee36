//! Human-readable text output for CLI.

use colored::*;

use super::OutputFormatter;
use roomlink_core::RegisterOutcome;

pub struct TextOutput;

impl TextOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextOutput {
    fn format_version(&self, name: &str, version: &str) -> String {
        format!("{} version {}", name, version)
    }

    fn format_device_count(&self, count: usize) -> String {
        format!("Device count: {}", count)
    }

    fn format_timed_out(&self, uuids: &[String]) -> String {
        if uuids.is_empty() {
            "No devices have timed out".to_string()
        } else {
            format!("Timed out devices: {}", uuids.join(", "))
        }
    }

    fn format_register(
        &self,
        outcome: &RegisterOutcome,
        device_uuid: &str,
        room_uuid: &str,
    ) -> String {
        match outcome {
            RegisterOutcome::AlreadyRegistered => format!(
                "Device {} is already registered in room {}",
                device_uuid, room_uuid
            ),
            RegisterOutcome::Registered => {
                format!("Device {} registered in room {}", device_uuid, room_uuid)
                    .green()
                    .to_string()
            }
        }
    }
}

//! Output formatting for CLI results.

pub mod json;
pub mod text;

pub use json::JsonOutput;
pub use text::TextOutput;

use roomlink_core::RegisterOutcome;

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the name/version banner
    fn format_version(&self, name: &str, version: &str) -> String;

    /// Format the device count
    fn format_device_count(&self, count: usize) -> String;

    /// Format the list of timed-out device UUIDs
    fn format_timed_out(&self, uuids: &[String]) -> String;

    /// Format a registration outcome
    fn format_register(
        &self,
        outcome: &RegisterOutcome,
        device_uuid: &str,
        room_uuid: &str,
    ) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TextOutput::new())
    }
}

//! Device-count command implementation.

use roomlink_core::{ops, BuildingApi};

use crate::error::CliError;
use crate::output::get_formatter;

/// Run the device-count command
pub async fn run_device_count(api: &dyn BuildingApi, json: bool) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    let count = ops::device_count(api).await?;

    println!("{}", formatter.format_device_count(count));

    Ok(())
}

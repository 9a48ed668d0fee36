//! Timeout-devices command implementation.

use roomlink_core::{ops, BuildingApi};

use crate::cli::TimeoutDevicesArgs;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the timeout-devices command
pub async fn run_timeout_devices(
    api: &dyn BuildingApi,
    args: TimeoutDevicesArgs,
    json: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    // Threshold validation happens before any request goes out.
    let timed_out = ops::timeout_devices(api, args.threshold).await?;

    println!("{}", formatter.format_timed_out(&timed_out));

    Ok(())
}

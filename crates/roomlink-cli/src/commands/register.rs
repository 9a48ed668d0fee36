//! Register-device command implementation.

use roomlink_core::{ops, BuildingApi};

use crate::cli::RegisterDeviceArgs;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the register-device command
pub async fn run_register_device(
    api: &dyn BuildingApi,
    args: RegisterDeviceArgs,
    json: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    let outcome = ops::register_device(api, &args.device_uuid, &args.room_uuid).await?;

    println!(
        "{}",
        formatter.format_register(&outcome, &args.device_uuid, &args.room_uuid)
    );

    Ok(())
}

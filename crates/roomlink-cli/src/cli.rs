//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};

/// Roomlink CLI - command-line client for the building-device API
#[derive(Parser, Debug)]
#[command(name = "roomlink-cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL of the building-management API
    #[arg(
        long,
        global = true,
        default_value = "http://localhost:3000",
        env = "ROOMLINK_BASE_URL"
    )]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value = "5000", env = "ROOMLINK_TIMEOUT")]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the application name and version
    Version,

    /// Print the number of devices registered in the building
    DeviceCount,

    /// List UUIDs of devices whose response time exceeds a threshold
    TimeoutDevices(TimeoutDevicesArgs),

    /// Register a device in a room
    RegisterDevice(RegisterDeviceArgs),
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct TimeoutDevicesArgs {
    /// Response-time threshold in milliseconds
    pub threshold: f64,
}

#[derive(Args, Debug)]
pub struct RegisterDeviceArgs {
    /// UUID of the device to register
    pub device_uuid: String,

    /// UUID of the room where the device should be registered
    pub room_uuid: String,
}

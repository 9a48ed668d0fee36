//! Command implementations.

pub mod count;
pub mod register;
pub mod timeout;
pub mod version;

pub use count::run_device_count;
pub use register::run_register_device;
pub use timeout::run_timeout_devices;
pub use version::run_version;

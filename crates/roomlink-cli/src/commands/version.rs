//! Version command implementation.

use crate::output::get_formatter;

/// Run the version command
pub fn run_version(json: bool) {
    let formatter = get_formatter(json);
    println!(
        "{}",
        formatter.format_version(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    );
}

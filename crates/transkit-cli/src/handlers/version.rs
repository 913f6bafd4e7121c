//! Version command handler

use crate::error::Result;
use crate::output::OutputWriter;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    core_version: &'static str,
}

/// Handle the version command
pub fn handle_version(output: &mut OutputWriter) -> Result<()> {
    let info = VersionInfo {
        name: env!("CARGO_BIN_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        core_version: transkit_core::VERSION,
    };

    match output.format() {
        crate::cli::OutputFormat::Human => output.writeln(&format!("{} {}", info.name, info.version)),
        _ => output.data(&info),
    }
}

//! Bandwidth conversion command handler

use crate::cli::MbpsArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{Conversion, OutputWriter};
use serde_json::Value;
use tracing::{debug, instrument};
use transkit_core::units::bps_to_mbps_value;

/// Handle the mbps command
#[instrument(skip_all, fields(count = args.values.len()))]
pub fn handle_mbps(args: MbpsArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("mbps_conversion");

    let conversions = args
        .values
        .iter()
        .map(|raw| convert_one(raw))
        .collect::<Result<Vec<_>>>()?;

    output.conversions(&conversions)
}

/// Convert a single command-line value, reusing the numeric string coercion of the core
fn convert_one(raw: &str) -> Result<Conversion> {
    let mbps = bps_to_mbps_value(&Value::String(raw.to_string()))?;
    debug!(input = raw, output = mbps, "Converted bandwidth");
    Ok(Conversion::new(raw, mbps))
}

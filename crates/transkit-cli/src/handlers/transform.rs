//! Transform command handler

use super::utils;
use crate::cli::{DocumentFormat, KeyStyle, TransformArgs, ValueStyle};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use std::fs;
use tracing::{debug, info, instrument};
use transkit_core::transform::built_in::{
    bps_to_mbps_values, camel_case_values, case_keys, snake_case_values, stringify_value,
};
use transkit_core::DictTransformer;

/// Handle the transform command
#[instrument(skip_all, fields(input = ?args.input))]
pub fn handle_transform(args: TransformArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("transform_command");

    let path = utils::input_path(args.input.as_deref());
    let content = utils::read_input(path)?;
    let format = utils::resolve_format(args.input_format, path);
    debug!(?format, "Parsing document");
    let document = utils::parse_document(&content, format, path)?;

    let keys = args.keys.or(config.transform.keys);
    let values = args.values.or(config.transform.values);
    let recursive = args.recursive || config.transform.recursive;
    let delimiter = utils::delimiter(config, args.delimiter.as_deref())?;

    let transformer = build_transformer(keys, values, delimiter, recursive);
    if transformer.is_identity() {
        info!("No key or value conversion selected, document passes through unchanged");
    }
    debug!(?transformer, delimiter, "Applying transformation");

    let transformed = {
        let _apply_timer = Timer::new("dict_transformation");
        transformer.apply_value(&document)?
    };

    match args.output_file {
        Some(output_file) => {
            let save_format = DocumentFormat::from_extension(&output_file).unwrap_or(DocumentFormat::Json);
            let rendered = utils::render_document(&transformed, save_format)?;
            fs::write(&output_file, rendered)?;
            output.success(&format!("✓ Output saved to {}", output_file.display()))
        }
        None => output.data(&transformed),
    }
}

/// Assemble the key and value functions selected on the command line or in config
fn build_transformer(
    keys: Option<KeyStyle>,
    values: Option<ValueStyle>,
    delimiter: &str,
    recursive: bool,
) -> DictTransformer<'_> {
    let mut transformer = DictTransformer::new().recursive(recursive);

    if let Some(style) = keys {
        transformer = transformer.keys(case_keys(style.into(), delimiter));
    }

    if let Some(style) = values {
        transformer = match style {
            ValueStyle::Snake => transformer.values(snake_case_values(delimiter)),
            ValueStyle::Camel => transformer.values(camel_case_values(delimiter)),
            ValueStyle::Text => transformer.values(stringify_value),
            ValueStyle::Mbps => transformer.values(bps_to_mbps_values),
        };
    }

    transformer
}

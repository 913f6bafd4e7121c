//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod case;
mod completions;
mod mbps;
mod transform;
mod utils;
mod version;

pub use case::{handle_camel, handle_snake};
pub use completions::handle_completions;
pub use mbps::handle_mbps;
pub use transform::handle_transform;
pub use version::handle_version;

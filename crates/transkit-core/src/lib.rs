//! Transkit Core - pure data-shape transformation utilities
//!
//! This crate provides small, side-effect free transformations for reshaping
//! identifiers, numbers and mappings.
//!
//! # Main Components
//!
//! - **Case Conversion**: camelCase to delimited snake_case and back ([`case`])
//! - **Unit Conversion**: bits per second to megabits per second ([`units`])
//! - **Dictionary Transformation**: key/value functions applied across nested
//!   mappings ([`transform`])
//! - **Error Handling**: error types using `thiserror` and `anyhow`
//!
//! # Example
//!
//! ```
//! use transkit_core::{bps_to_mbps, camel_to_snake, snake_to_camel};
//!
//! assert_eq!(camel_to_snake("HTTPResponseCodeXYZ", "_"), "http_response_code_xyz");
//! assert_eq!(snake_to_camel("the_id", "_"), "theId");
//! assert_eq!(bps_to_mbps(1_129_000.0), 1.13);
//! ```

pub mod case;
pub mod error;
pub mod transform;
pub mod units;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use case::{camel_to_snake, snake_to_camel, CaseStyle, DEFAULT_DELIMITER};
pub use units::{bps_to_mbps, ConversionFormula, UnitConversion};
pub use transform::{transform_dict, transform_value, DictTransformer, Mapping};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        assert_eq!(camel_to_snake("CamelCase", DEFAULT_DELIMITER), "camel_case");
        assert_eq!(CaseStyle::Camel.apply("a_b", DEFAULT_DELIMITER), "aB");
        assert_eq!(bps_to_mbps(1_000_000.0), 1.0);
    }
}

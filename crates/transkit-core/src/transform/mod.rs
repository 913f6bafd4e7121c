//! Dictionary key/value transformation
//!
//! This module applies optional key and value functions across a
//! [`Mapping`], optionally recursing into nested mappings.
//!
//! # Module Organization
//!
//! - [`types`] - Mapping and function type aliases
//! - [`dict`] - `transform_dict` and the `transform_value` guard
//! - [`builder`] - Fluent builder for reusable transformations
//! - [`built_in`] - Key and value functions built on the case and unit conversions
//!
//! # Examples
//!
//! ```
//! use transkit_core::transform::{built_in, transform_dict, Mapping};
//! use serde_json::json;
//!
//! let input: Mapping = json!({"CamelCase": "gnaaa", "foo_oool": 42})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let keys = built_in::snake_case_keys("_");
//! let output = transform_dict(&input, Some(&keys), None, false).unwrap();
//! assert_eq!(serde_json::Value::Object(output.into_owned()), json!({"camel_case": "gnaaa", "foo_oool": 42}));
//! ```
//!
//! ## Builder
//!
//! ```
//! use transkit_core::transform::{built_in, DictTransformer};
//! use serde_json::json;
//!
//! let transformer = DictTransformer::new()
//!     .values(built_in::snake_case_values("_"))
//!     .recursive(true);
//!
//! let input = json!({"1": {"11": "snakeCase"}, "2": 22});
//! let output = transformer.apply_value(&input).unwrap();
//! assert_eq!(*output, json!({"1": {"11": "snake_case"}, "2": "22"}));
//! ```
//!
//! Copyright (c) 2025 Transkit Team
//! Licensed under the Apache-2.0 license

pub mod types;

pub mod dict;

pub mod builder;

pub mod built_in;

#[cfg(test)]
mod tests;

pub use types::{KeyFn, Mapping, ValueFn};
pub use dict::{transform_dict, transform_value};
pub use builder::DictTransformer;

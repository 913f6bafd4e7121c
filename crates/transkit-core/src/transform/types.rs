//! Core types for the dictionary transformer
//!
//! Copyright (c) 2025 Transkit Team
//! Licensed under the Apache-2.0 license

use crate::Result;
use serde_json::{Map, Value};

/// An ordered mapping of string keys to JSON values
pub type Mapping = Map<String, Value>;

/// A function applied to every key of a mapping
pub type KeyFn<'f> = &'f dyn Fn(&str) -> Result<String>;

/// A function applied to every (non-mapping, when recursing) value of a mapping
pub type ValueFn<'f> = &'f dyn Fn(&Value) -> Result<Value>;

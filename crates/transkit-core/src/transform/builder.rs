//! Builder for configuring dictionary transformations
//!
//! This module provides a fluent builder API for assembling the key function,
//! value function and recursion flag once and applying them to many mappings.
//!
//! Copyright (c) 2025 Transkit Team
//! Licensed under the Apache-2.0 license

use super::dict::{transform_dict, transform_value};
use super::types::Mapping;
use crate::Result;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

type BoxedKeyFn<'f> = Box<dyn Fn(&str) -> Result<String> + 'f>;
type BoxedValueFn<'f> = Box<dyn Fn(&Value) -> Result<Value> + 'f>;

/// Reusable dictionary transformation
#[derive(Default)]
pub struct DictTransformer<'f> {
    key_fn: Option<BoxedKeyFn<'f>>,
    value_fn: Option<BoxedValueFn<'f>>,
    recursive: bool,
}

impl<'f> DictTransformer<'f> {
    /// Create a transformer that leaves mappings untouched
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the function applied to every key
    pub fn keys<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<String> + 'f,
    {
        self.key_fn = Some(Box::new(f));
        self
    }

    /// Set the function applied to every value
    pub fn values<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + 'f,
    {
        self.value_fn = Some(Box::new(f));
        self
    }

    /// Descend into nested mappings
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Whether applying this transformer returns its input unchanged
    pub fn is_identity(&self) -> bool {
        self.key_fn.is_none() && self.value_fn.is_none()
    }

    /// Apply to a mapping
    pub fn apply<'a>(&self, map: &'a Mapping) -> Result<Cow<'a, Mapping>> {
        transform_dict(map, self.key_fn.as_deref(), self.value_fn.as_deref(), self.recursive)
    }

    /// Apply to a dynamic value that must be a mapping
    pub fn apply_value<'a>(&self, value: &'a Value) -> Result<Cow<'a, Value>> {
        transform_value(value, self.key_fn.as_deref(), self.value_fn.as_deref(), self.recursive)
    }
}

impl fmt::Debug for DictTransformer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictTransformer")
            .field("key_fn", &self.key_fn.is_some())
            .field("value_fn", &self.value_fn.is_some())
            .field("recursive", &self.recursive)
            .finish()
    }
}

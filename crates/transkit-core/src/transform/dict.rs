//! Dictionary transformation
//!
//! Applies optional key and value functions across a mapping, optionally
//! descending into nested mappings.
//!
//! Copyright (c) 2025 Transkit Team
//! Licensed under the Apache-2.0 license

use super::types::{KeyFn, Mapping, ValueFn};
use crate::error::{value_kind, Error};
use crate::Result;
use serde_json::Value;
use std::borrow::Cow;

/// Transform the keys and/or values of a mapping.
///
/// With neither function supplied the input is handed back as
/// `Cow::Borrowed`, the very same reference. Otherwise a new mapping is built
/// in the input's iteration order; the input is only ever read.
///
/// When `recursive` is set, values that are themselves mappings are
/// transformed with the same functions instead of being passed to
/// `value_fn`. Arrays are not mappings and reach `value_fn` whole. Keys are
/// always strings, so they never recurse.
///
/// Two source keys that map to the same output key resolve last write wins;
/// the entry keeps the position of the first one.
///
/// Errors returned by either function are propagated as-is.
pub fn transform_dict<'a>(
    map: &'a Mapping,
    key_fn: Option<KeyFn<'_>>,
    value_fn: Option<ValueFn<'_>>,
    recursive: bool,
) -> Result<Cow<'a, Mapping>> {
    if key_fn.is_none() && value_fn.is_none() {
        return Ok(Cow::Borrowed(map));
    }

    transform_entries(map, key_fn, value_fn, recursive).map(Cow::Owned)
}

/// Transform a dynamic value that is required to be a mapping.
///
/// Anything other than a JSON object fails with [`Error::NotAMapping`]
/// before any function is called.
pub fn transform_value<'a>(
    value: &'a Value,
    key_fn: Option<KeyFn<'_>>,
    value_fn: Option<ValueFn<'_>>,
    recursive: bool,
) -> Result<Cow<'a, Value>> {
    let map = value.as_object().ok_or(Error::NotAMapping {
        found: value_kind(value),
    })?;

    Ok(match transform_dict(map, key_fn, value_fn, recursive)? {
        Cow::Borrowed(_) => Cow::Borrowed(value),
        Cow::Owned(map) => Cow::Owned(Value::Object(map)),
    })
}

fn transform_entries(
    map: &Mapping,
    key_fn: Option<KeyFn<'_>>,
    value_fn: Option<ValueFn<'_>>,
    recursive: bool,
) -> Result<Mapping> {
    let mut output = Mapping::with_capacity(map.len());

    for (key, value) in map {
        let new_key = match key_fn {
            Some(f) => f(key)?,
            None => key.clone(),
        };

        let new_value = match value {
            Value::Object(nested) if recursive => {
                Value::Object(transform_entries(nested, key_fn, value_fn, recursive)?)
            }
            _ => match value_fn {
                Some(f) => f(value)?,
                None => value.clone(),
            },
        };

        if output.contains_key(&new_key) {
            log::debug!("Key '{}' (from '{}') collides with an earlier key, keeping the last value", new_key, key);
        }
        output.insert(new_key, new_value);
    }

    log::trace!("Transformed mapping with {} entries into {} entries", map.len(), output.len());
    Ok(output)
}

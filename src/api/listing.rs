//! Normalisation of collection responses.
//!
//! Collection endpoints answer either with a bare JSON array or with an object
//! wrapping the array under a key declared per record type. Anything else is
//! rejected as [`ApiError::UnexpectedShape`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;
use crate::models::{Complaint, House, RentStatus, Tenant};

/// A record type served by a collection endpoint.
pub trait Listed: DeserializeOwned {
    /// Object keys under which the backend may wrap the array.
    const WRAPPER_KEYS: &'static [&'static str];
}

impl Listed for House {
    const WRAPPER_KEYS: &'static [&'static str] = &["houses"];
}

impl Listed for Tenant {
    const WRAPPER_KEYS: &'static [&'static str] = &["tenants"];
}

impl Listed for Complaint {
    const WRAPPER_KEYS: &'static [&'static str] = &["complaints"];
}

impl Listed for RentStatus {
    const WRAPPER_KEYS: &'static [&'static str] = &["rentStatus", "rent_status"];
}

pub fn normalize<T: Listed>(body: Value) -> Result<Vec<T>, ApiError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let wrapped = T::WRAPPER_KEYS
                .iter()
                .find_map(|key| match map.remove(*key) {
                    Some(Value::Array(items)) => Some(items),
                    _ => None,
                });
            match wrapped {
                Some(items) => items,
                None => {
                    return Err(ApiError::UnexpectedShape(format!(
                        "expected an array or an object with {:?}",
                        T::WRAPPER_KEYS
                    )));
                }
            }
        }
        other => {
            return Err(ApiError::UnexpectedShape(format!(
                "expected an array, got {}",
                kind_of(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| ApiError::UnexpectedShape(format!("record {index}: {e}")))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

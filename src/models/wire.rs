//! Lenient field decoders for backend records.
//!
//! The backend stringifies every column before encoding it, so a numeric
//! field can arrive as `3`, `3.0` or `"3"`, and a missing foreign key as
//! `null` or `"None"`. These helpers accept all of those forms.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

fn is_blank(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text.eq_ignore_ascii_case("none") || text.eq_ignore_ascii_case("null")
}

fn scalar_to_int<E: Error>(value: Scalar) -> Result<i64, E> {
    match value {
        Scalar::Int(n) => Ok(n),
        Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
        Scalar::Float(f) => Err(E::custom(format!("expected an integer, got {f}"))),
        Scalar::Bool(b) => Err(E::custom(format!("expected an integer, got {b}"))),
        Scalar::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("expected an integer, got {s:?}"))),
    }
}

pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    scalar_to_int(Scalar::deserialize(deserializer)?)
}

pub fn optional_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Text(s)) if is_blank(&s) => Ok(None),
        Some(value) => scalar_to_int(value).map(Some),
    }
}

pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => Ok(n as f64),
        Scalar::Float(f) => Ok(f),
        Scalar::Bool(b) => Err(D::Error::custom(format!("expected a number, got {b}"))),
        Scalar::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected a number, got {s:?}"))),
    }
}

pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Scalar::deserialize(deserializer)? {
        Scalar::Bool(b) => Ok(b),
        Scalar::Int(n) => Ok(n != 0),
        Scalar::Float(f) => Ok(f != 0.0),
        Scalar::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "paid" => Ok(true),
            "false" | "0" | "no" | "unpaid" | "" => Ok(false),
            other => Err(D::Error::custom(format!("expected a boolean, got {other:?}"))),
        },
    }
}

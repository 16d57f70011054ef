//! Top-level serialize/deserialize entry points
//!
//! These wrap [`Encoder`] and [`Decoder`] with the function-handling rules:
//!
//! - `serialize` with `ignore_function` encodes functions as envelopes and
//!   then prunes every one of them; a function at the root leaves the
//!   Undefined envelope
//! - `deserialize` prunes every Function envelope before decoding unless
//!   `dangerously_deserialize_function` is set; a pruned root decodes to
//!   `Value::Undefined`
//!
//! `stringify` and `parse` are the same operations on JSON text.
//!
//! `Value` also implements serde's `Serialize` and `Deserialize` with the
//! default options, so it can sit inside other serde types.
//!
//! # Examples
//!
//! ```rust
//! use typson_core::{codec, Value};
//!
//! let value = Value::record([("n", Value::from(f64::NAN)), ("ok", Value::from(true))]);
//! let text = codec::stringify(&value).unwrap();
//! assert_eq!(text, r#"{"n":{"__t":"Number","__v":"nan"},"ok":true}"#);
//!
//! let back = codec::parse(&text).unwrap();
//! assert!(back.get("n").unwrap().is_nan());
//! ```

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::envelope;
use crate::error::Result;
use crate::kind::Kind;
use crate::omit::omit;
use crate::options::{DeserializeOptions, SerializeOptions};
use crate::value::Value;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;

/// Encode `value` with default options
pub fn serialize(value: &Value) -> Result<Json> {
    serialize_with(value, &SerializeOptions::default())
}

/// Encode `value` into its wire form
///
/// # Errors
///
/// `Error::UnsupportedKind` for a value outside the catalog (or a function,
/// unless functions are ignored or embedded). No partial output is produced.
#[tracing::instrument(level = "debug", skip_all, fields(ignore_function = options.ignore_function))]
pub fn serialize_with(value: &Value, options: &SerializeOptions) -> Result<Json> {
    let wire = Encoder::new(options).encode(value)?;
    if !options.ignore_function {
        return Ok(wire);
    }
    Ok(omit(&wire, Kind::Function).unwrap_or_else(envelope::undefined))
}

pub fn stringify(value: &Value) -> Result<String> {
    stringify_with(value, &SerializeOptions::default())
}

/// Encode `value` and render it as compact JSON text
pub fn stringify_with(value: &Value, options: &SerializeOptions) -> Result<String> {
    let wire = serialize_with(value, options)?;
    Ok(serde_json::to_string(&wire)?)
}

/// Decode `wire` with default options
pub fn deserialize(wire: &Json) -> Result<Value> {
    deserialize_with(wire, &DeserializeOptions::default())
}

/// Decode a wire tree back into a value
///
/// # Errors
///
/// `Error::MalformedEnvelope` when a recognized tag carries a payload of the
/// wrong shape and the envelope policy is strict. Unknown tags never fail.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(dangerously_deserialize_function = options.dangerously_deserialize_function)
)]
pub fn deserialize_with(wire: &Json, options: &DeserializeOptions) -> Result<Value> {
    let mut decoder = Decoder::new(options);
    if options.dangerously_deserialize_function {
        return decoder.decode(wire);
    }
    match omit(wire, Kind::Function) {
        Some(pruned) => decoder.decode(&pruned),
        None => Ok(Value::Undefined),
    }
}

pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &DeserializeOptions::default())
}

/// Parse JSON text and decode it
pub fn parse_with(text: &str, options: &DeserializeOptions) -> Result<Value> {
    let wire: Json = serde_json::from_str(text)?;
    deserialize_with(&wire, options)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let wire = serialize_with(self, &SerializeOptions::default())
            .map_err(<S::Error as ser::Error>::custom)?;
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = Json::deserialize(deserializer)?;
        deserialize(&wire).map_err(<D::Error as de::Error>::custom)
    }
}

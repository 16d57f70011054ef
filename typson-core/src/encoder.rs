//! Value to wire-form encoding
//!
//! The encoder walks a [`Value`] tree depth-first and produces a JSON tree in
//! which every node is either JSON-native passthrough or a tagged envelope.
//! Record field order, array order and map/set insertion order are kept.
//!
//! Numbers need care: JSON has no NaN or infinities, so those travel as
//! `Number` envelopes, while finite numbers are emitted bare. Integral values
//! inside the safe-integer range are written without a fractional part.

use crate::envelope::{self, wrap};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::options::{SerializeOptions, UnsupportedPolicy};
use crate::path::{key_label, Path, Segment};
use crate::value::{Function, Instance, Record, Value};
use serde_json::{json, Map, Value as Json};
use tracing::warn;

/// Largest integer a double holds exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub struct Encoder<'o> {
    options: &'o SerializeOptions,
    path: Path,
}

impl<'o> Encoder<'o> {
    pub fn new(options: &'o SerializeOptions) -> Self {
        Self {
            options,
            path: Path::new(),
        }
    }

    /// Encode `value` into its wire form
    ///
    /// Stops at the first value that can't be encoded; the error carries its
    /// path from the root.
    pub fn encode(&mut self, value: &Value) -> Result<Json> {
        let wire = match value {
            Value::String(s) => Json::String(s.clone()),
            Value::Boolean(b) => Json::Bool(*b),
            Value::Null => Json::Null,
            Value::Number(n) => self.number(*n),
            Value::Undefined => envelope::undefined(),
            Value::Symbol(symbol) => wrap(Kind::Symbol, symbol.description().unwrap_or("")),
            Value::BigInt(n) => wrap(Kind::BigInt, n.to_string()),
            Value::RegExp(re) => wrap(
                Kind::RegExp,
                json!({"source": re.source(), "flags": re.flags()}),
            ),
            Value::Date(date) => wrap(Kind::Date, date.timestamp_millis()),
            Value::Url(url) => wrap(Kind::Url, url.as_str()),
            Value::UrlSearchParams(params) => wrap(Kind::UrlSearchParams, params.to_string()),
            Value::Map(entries) => self.map(entries)?,
            Value::Set(members) => wrap(Kind::Set, self.elements(members)?),
            Value::Function(function) => self.function(function)?,
            Value::Array(items) => Json::Array(self.elements(items)?),
            Value::Record(record) => self.record(record)?,
            Value::DataView(view) => wrap(
                Kind::DataView,
                json!({
                    "buffer": view.buffer(),
                    "byteOffset": view.byte_offset(),
                    "byteLength": view.byte_length(),
                }),
            ),
            Value::ArrayBuffer(bytes) => wrap(Kind::ArrayBuffer, bytes.as_slice()),
            Value::SharedArrayBuffer(bytes) => wrap(Kind::SharedArrayBuffer, bytes.as_slice()),
            Value::ByteBuffer(bytes) => wrap(Kind::ByteBuffer, &bytes[..]),
            Value::Int8Array(items) => wrap(Kind::Int8Array, items.as_slice()),
            Value::Uint8Array(items) => wrap(Kind::Uint8Array, items.as_slice()),
            Value::Uint8ClampedArray(items) => wrap(Kind::Uint8ClampedArray, items.as_slice()),
            Value::Int16Array(items) => wrap(Kind::Int16Array, items.as_slice()),
            Value::Uint16Array(items) => wrap(Kind::Uint16Array, items.as_slice()),
            Value::Int32Array(items) => wrap(Kind::Int32Array, items.as_slice()),
            Value::Uint32Array(items) => wrap(Kind::Uint32Array, items.as_slice()),
            Value::Float32Array(items) => wrap(
                Kind::Float32Array,
                float_elements(items.iter().map(|f| f64::from(*f))),
            ),
            Value::Float64Array(items) => {
                wrap(Kind::Float64Array, float_elements(items.iter().copied()))
            }
            Value::BigInt64Array(items) => wrap(Kind::BigInt64Array, decimal_strings(items)),
            Value::BigUint64Array(items) => wrap(Kind::BigUint64Array, decimal_strings(items)),
            Value::Instance(instance) => self.instance(value, instance)?,
        };
        Ok(wire)
    }

    fn number(&self, n: f64) -> Json {
        if n.is_nan() {
            wrap(Kind::Number, "nan")
        } else if n.is_infinite() {
            if n < 0.0 && self.options.preserve_infinity_sign {
                wrap(Kind::Number, "-infinity")
            } else {
                wrap(Kind::Number, "infinity")
            }
        } else {
            number_to_json(n)
        }
    }

    fn child(&mut self, segment: Segment, value: &Value) -> Result<Json> {
        self.path.push(segment);
        let wire = self.encode(value);
        self.path.pop();
        wire
    }

    fn elements(&mut self, items: &[Value]) -> Result<Vec<Json>> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.child(Segment::Index(index), item))
            .collect()
    }

    fn record(&mut self, record: &Record) -> Result<Json> {
        let mut fields = Map::with_capacity(record.len());
        for (key, value) in record {
            let wire = self.child(Segment::Field(key.clone()), value)?;
            fields.insert(key.clone(), wire);
        }
        Ok(Json::Object(fields))
    }

    /// Keys are encoded like any other value, so non-string keys survive
    fn map(&mut self, entries: &[(Value, Value)]) -> Result<Json> {
        let mut pairs = Vec::with_capacity(entries.len());
        for (index, (key, value)) in entries.iter().enumerate() {
            let key_wire = self.child(Segment::MapKey(index), key)?;
            let value_wire = self.child(
                Segment::MapValue {
                    label: key_label(key),
                    index,
                },
                value,
            )?;
            pairs.push(Json::Array(vec![key_wire, value_wire]));
        }
        Ok(wrap(Kind::Map, pairs))
    }

    fn function(&self, function: &Function) -> Result<Json> {
        if self.options.encodes_functions() {
            Ok(wrap(Kind::Function, function.source()))
        } else {
            Err(Error::UnsupportedKind {
                description: Kind::Function.name().to_string(),
                path: self.path.to_string(),
            })
        }
    }

    fn instance(&mut self, value: &Value, instance: &Instance) -> Result<Json> {
        match self.options.unsupported {
            UnsupportedPolicy::Fail => Err(Error::UnsupportedKind {
                description: value.describe(),
                path: self.path.to_string(),
            }),
            UnsupportedPolicy::Passthrough => {
                warn!(
                    type_name = %instance.type_name,
                    path = %self.path,
                    "encoding unrecognized value as a plain record"
                );
                self.record(&instance.fields)
            }
        }
    }
}

/// Emit a finite number, as an integer when it is one exactly
pub(crate) fn number_to_json(n: f64) -> Json {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Json::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Json::Number)
            .unwrap_or(Json::Null)
    }
}

/// Non-finite elements have no JSON form and become null
fn float_elements(items: impl Iterator<Item = f64>) -> Json {
    Json::Array(
        items
            .map(|f| {
                if f.is_finite() {
                    number_to_json(f)
                } else {
                    Json::Null
                }
            })
            .collect(),
    )
}

fn decimal_strings<T: ToString>(items: &[T]) -> Json {
    Json::Array(items.iter().map(|n| Json::String(n.to_string())).collect())
}

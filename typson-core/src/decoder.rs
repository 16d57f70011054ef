//! Wire-form to value decoding
//!
//! The decoder is the inverse of the encoder. Every object node is checked for
//! the envelope shape; a recognized tag dispatches to the kind's payload
//! decoder, anything else is decoded structurally as a plain record or array.
//!
//! Unknown tags are not errors. A recognized tag with a payload of the wrong
//! shape is, unless [`EnvelopePolicy::Lenient`] is set, in which case the node
//! falls back to plain-record decoding.
//!
//! Function envelopes decode to opaque functions. Source text is only compiled
//! into a callable when `dangerously_deserialize_function` is set and a
//! [`crate::FunctionCompiler`] is configured.

use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::options::{DeserializeOptions, EnvelopePolicy};
use crate::path::{key_label, Path, Segment};
use crate::value::{DataView, Function, Record, RegExp, SearchParams, Symbol, Value};
use bytes::Bytes;
use chrono::DateTime;
use num_bigint::BigInt;
use serde_json::{Map, Value as Json};
use std::str::FromStr;
use tracing::{debug, trace};
use url::Url;

pub struct Decoder<'o> {
    options: &'o DeserializeOptions,
    path: Path,
}

impl<'o> Decoder<'o> {
    pub fn new(options: &'o DeserializeOptions) -> Self {
        Self {
            options,
            path: Path::new(),
        }
    }

    /// Decode a wire node and everything below it
    pub fn decode(&mut self, wire: &Json) -> Result<Value> {
        if let Some(envelope) = Envelope::parse(wire) {
            match envelope.kind() {
                Some(kind) => match self.decode_payload(kind, envelope.payload) {
                    Ok(value) => return Ok(value),
                    Err(err)
                        if err.is_malformed_envelope()
                            && self.options.envelopes == EnvelopePolicy::Lenient =>
                    {
                        debug!(
                            kind = %kind,
                            path = %self.path,
                            error = %err,
                            "malformed envelope decoded as a plain record"
                        );
                    }
                    Err(err) => return Err(err),
                },
                None => trace!(
                    tag = envelope.tag,
                    path = %self.path,
                    "unknown envelope tag decoded as a plain record"
                ),
            }
        }
        self.structural(wire)
    }

    /// Decode the payload of an envelope tagged with `kind`
    pub fn decode_payload(&mut self, kind: Kind, payload: &Json) -> Result<Value> {
        let value = match kind {
            Kind::Number => match self.payload_str(kind, payload)? {
                "nan" => Value::Number(f64::NAN),
                "infinity" => Value::Number(f64::INFINITY),
                "-infinity" => Value::Number(f64::NEG_INFINITY),
                other => {
                    return Err(self.malformed(kind, format!("unknown number literal {:?}", other)))
                }
            },
            Kind::Undefined => match self.payload_str(kind, payload)? {
                "undefined" => Value::Undefined,
                other => return Err(self.malformed(kind, format!("unexpected payload {:?}", other))),
            },
            Kind::Symbol => match self.payload_str(kind, payload)? {
                "" => Value::Symbol(Symbol::anonymous()),
                description => Value::Symbol(Symbol::new(description)),
            },
            Kind::BigInt => {
                let digits = self.payload_str(kind, payload)?;
                let n = BigInt::from_str(digits)
                    .map_err(|e| self.malformed(kind, format!("{:?}: {}", digits, e)))?;
                Value::BigInt(n)
            }
            Kind::RegExp => {
                let fields = self.payload_object(kind, payload)?;
                let source = self.field_str(kind, fields, "source")?;
                let flags = self.field_str(kind, fields, "flags")?;
                let re = RegExp::new(source, flags).map_err(|e| self.rejected(kind, e))?;
                Value::RegExp(re)
            }
            Kind::Date => {
                // chrono stops near +/-8.2e15 ms, short of the +/-8.64e15 ms a JS
                // date allows; dates in that gap fail as out of range
                let millis = payload
                    .as_f64()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| self.unexpected(kind, "a finite number", payload))?;
                let date = DateTime::from_timestamp_millis(millis.trunc() as i64)
                    .ok_or_else(|| self.malformed(kind, format!("{} is out of range", millis)))?;
                Value::Date(date)
            }
            Kind::Url => {
                let href = self.payload_str(kind, payload)?;
                let url = Url::parse(href)
                    .map_err(|e| self.malformed(kind, format!("{:?}: {}", href, e)))?;
                Value::Url(url)
            }
            Kind::UrlSearchParams => {
                Value::UrlSearchParams(SearchParams::parse(self.payload_str(kind, payload)?))
            }
            // the payload already lists distinct members, so it is kept as is
            Kind::Map => self.map(payload)?,
            Kind::Set => Value::Set(self.elements(kind, payload)?),
            Kind::Function => Value::Function(self.function(self.payload_str(kind, payload)?)?),
            Kind::DataView => {
                let fields = self.payload_object(kind, payload)?;
                let buffer = match fields.get("buffer") {
                    Some(buffer) => self.integers::<u8>(kind, buffer)?,
                    None => return Err(self.malformed(kind, "missing field \"buffer\"")),
                };
                let byte_offset = self.field_usize(kind, fields, "byteOffset")?;
                let byte_length = self.field_usize(kind, fields, "byteLength")?;
                let view = DataView::new(buffer, byte_offset, byte_length)
                    .map_err(|e| self.rejected(kind, e))?;
                Value::DataView(view)
            }
            Kind::ArrayBuffer => Value::ArrayBuffer(self.integers(kind, payload)?),
            Kind::SharedArrayBuffer => Value::SharedArrayBuffer(self.integers(kind, payload)?),
            Kind::ByteBuffer => {
                Value::ByteBuffer(Bytes::from(self.integers::<u8>(kind, payload)?))
            }
            Kind::Int8Array => Value::Int8Array(self.integers(kind, payload)?),
            Kind::Uint8Array => Value::Uint8Array(self.integers(kind, payload)?),
            Kind::Uint8ClampedArray => Value::Uint8ClampedArray(self.integers(kind, payload)?),
            Kind::Int16Array => Value::Int16Array(self.integers(kind, payload)?),
            Kind::Uint16Array => Value::Uint16Array(self.integers(kind, payload)?),
            Kind::Int32Array => Value::Int32Array(self.integers(kind, payload)?),
            Kind::Uint32Array => Value::Uint32Array(self.integers(kind, payload)?),
            Kind::Float32Array => Value::Float32Array(
                self.floats(kind, payload)?
                    .into_iter()
                    .map(|f| f as f32)
                    .collect(),
            ),
            Kind::Float64Array => Value::Float64Array(self.floats(kind, payload)?),
            Kind::BigInt64Array => Value::BigInt64Array(self.wide_integers(kind, payload)?),
            Kind::BigUint64Array => Value::BigUint64Array(self.wide_integers(kind, payload)?),
            // passthrough kinds never arrive in an envelope, but the table is total
            Kind::String => Value::String(self.payload_str(kind, payload)?.to_string()),
            Kind::Boolean => Value::Boolean(
                payload
                    .as_bool()
                    .ok_or_else(|| self.unexpected(kind, "a boolean", payload))?,
            ),
            Kind::Null if payload.is_null() => Value::Null,
            Kind::Null => return Err(self.unexpected(kind, "null", payload)),
            Kind::Array => Value::Array(self.elements(kind, payload)?),
            Kind::Record => {
                self.payload_object(kind, payload)?;
                self.structural(payload)?
            }
        };
        Ok(value)
    }

    /// Decode without interpreting this node as an envelope
    fn structural(&mut self, wire: &Json) -> Result<Value> {
        let value = match wire {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(*b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s.clone()),
            Json::Array(items) => Value::Array(self.decode_all(items)?),
            Json::Object(fields) => {
                let mut record = Record::with_capacity(fields.len());
                for (key, field) in fields {
                    let value = self.child(Segment::Field(key.clone()), field)?;
                    record.insert(key.clone(), value);
                }
                Value::Record(record)
            }
        };
        Ok(value)
    }

    fn child(&mut self, segment: Segment, wire: &Json) -> Result<Value> {
        self.path.push(segment);
        let value = self.decode(wire);
        self.path.pop();
        value
    }

    fn decode_all(&mut self, items: &[Json]) -> Result<Vec<Value>> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.child(Segment::Index(index), item))
            .collect()
    }

    fn elements(&mut self, kind: Kind, payload: &Json) -> Result<Vec<Value>> {
        let items = self.payload_array(kind, payload)?;
        self.decode_all(items)
    }

    fn map(&mut self, payload: &Json) -> Result<Value> {
        let pairs = self.payload_array(Kind::Map, payload)?;
        let mut entries = Vec::with_capacity(pairs.len());
        for (index, pair) in pairs.iter().enumerate() {
            let (key_wire, value_wire) = match pair.as_array().map(Vec::as_slice) {
                Some([key, value]) => (key, value),
                _ => {
                    return Err(self.malformed(
                        Kind::Map,
                        format!("entry {} is not a [key, value] pair", index),
                    ))
                }
            };
            let key = self.child(Segment::MapKey(index), key_wire)?;
            let value = self.child(
                Segment::MapValue {
                    label: key_label(&key),
                    index,
                },
                value_wire,
            )?;
            entries.push((key, value));
        }
        Ok(Value::Map(entries))
    }

    fn function(&self, source: &str) -> Result<Function> {
        match &self.options.function_compiler {
            Some(compiler) if self.options.dangerously_deserialize_function => {
                debug!(path = %self.path, "compiling function source");
                compiler.compile(source)
            }
            _ => Ok(Function::opaque(source)),
        }
    }

    /// Integer elements narrowed to `T`, rejecting anything out of range
    fn integers<T: TryFrom<i64>>(&self, kind: Kind, payload: &Json) -> Result<Vec<T>> {
        self.payload_array(kind, payload)?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                integral(item)
                    .and_then(|n| T::try_from(n).ok())
                    .ok_or_else(|| {
                        self.malformed(kind, format!("element {} is out of range: {}", index, item))
                    })
            })
            .collect()
    }

    /// Float elements; null stands for a non-finite value and decodes to NaN
    fn floats(&self, kind: Kind, payload: &Json) -> Result<Vec<f64>> {
        self.payload_array(kind, payload)?
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Json::Null => Ok(f64::NAN),
                Json::Number(n) => Ok(n.as_f64().unwrap_or(f64::NAN)),
                other => Err(self.malformed(
                    kind,
                    format!("element {} is not a number: {}", index, other),
                )),
            })
            .collect()
    }

    /// 64-bit elements, written as decimal strings
    fn wide_integers<T: FromStr>(&self, kind: Kind, payload: &Json) -> Result<Vec<T>> {
        self.payload_array(kind, payload)?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let parsed: Option<T> = match item {
                    Json::String(digits) => digits.parse().ok(),
                    Json::Number(n) => n.to_string().parse().ok(),
                    _ => None,
                };
                parsed.ok_or_else(|| {
                    self.malformed(kind, format!("element {} is not a 64-bit integer: {}", index, item))
                })
            })
            .collect()
    }

    fn payload_str<'p>(&self, kind: Kind, payload: &'p Json) -> Result<&'p str> {
        payload
            .as_str()
            .ok_or_else(|| self.unexpected(kind, "a string", payload))
    }

    fn payload_array<'p>(&self, kind: Kind, payload: &'p Json) -> Result<&'p Vec<Json>> {
        payload
            .as_array()
            .ok_or_else(|| self.unexpected(kind, "an array", payload))
    }

    fn payload_object<'p>(&self, kind: Kind, payload: &'p Json) -> Result<&'p Map<String, Json>> {
        payload
            .as_object()
            .ok_or_else(|| self.unexpected(kind, "an object", payload))
    }

    fn field_str<'p>(
        &self,
        kind: Kind,
        fields: &'p Map<String, Json>,
        name: &str,
    ) -> Result<&'p str> {
        fields
            .get(name)
            .and_then(Json::as_str)
            .ok_or_else(|| self.malformed(kind, format!("field {:?} must be a string", name)))
    }

    fn field_usize(&self, kind: Kind, fields: &Map<String, Json>, name: &str) -> Result<usize> {
        fields
            .get(name)
            .and_then(integral)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                self.malformed(kind, format!("field {:?} must be a non-negative integer", name))
            })
    }

    fn malformed(&self, kind: Kind, reason: impl Into<String>) -> Error {
        Error::MalformedEnvelope {
            kind,
            reason: reason.into(),
            path: self.path.to_string(),
        }
    }

    fn unexpected(&self, kind: Kind, expected: &str, found: &Json) -> Error {
        self.malformed(kind, format!("expected {}, found {}", expected, shape(found)))
    }

    /// A value constructor refused the payload
    fn rejected(&self, kind: Kind, err: Error) -> Error {
        match err {
            Error::InvalidValue { reason, .. } => self.malformed(kind, reason),
            other => self.malformed(kind, other.to_string()),
        }
    }
}

/// Integer value of a JSON number, accepting integral floats
fn integral(json: &Json) -> Option<i64> {
    json.as_i64().or_else(|| {
        json.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn shape(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

//! Runtime kind discrimination
//!
//! [`classify`] maps a [`Value`] onto the catalog. Over the Rust value model
//! this is an exhaustive match, but the arms follow
//! [`Kind::CLASSIFY_ORDER`]: byte buffers are resolved before the typed-array
//! family and plain records come last, so the two stay in step if either
//! changes.
//!
//! [`classify_wire`] answers the same question for an encoded JSON tree: which
//! kind does this wire node carry?

use crate::envelope::Envelope;
use crate::kind::Kind;
use crate::value::Value;

/// Result of classifying a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Known(Kind),
    /// Outside the catalog; the encoder either fails or passes it through
    Unrecognized { type_name: String },
}

impl Classification {
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Classification::Known(kind) => Some(*kind),
            Classification::Unrecognized { .. } => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Classification::Known(_))
    }
}

/// Classify an in-memory value
pub fn classify(value: &Value) -> Classification {
    let kind = match value {
        Value::Null => Kind::Null,
        Value::String(_) => Kind::String,
        Value::Number(_) => Kind::Number,
        Value::Boolean(_) => Kind::Boolean,
        Value::Undefined => Kind::Undefined,
        Value::Symbol(_) => Kind::Symbol,
        Value::BigInt(_) => Kind::BigInt,
        Value::Function(_) => Kind::Function,
        Value::RegExp(_) => Kind::RegExp,
        Value::Date(_) => Kind::Date,
        Value::Map(_) => Kind::Map,
        Value::Set(_) => Kind::Set,
        Value::Array(_) => Kind::Array,
        // must precede the byte-array family
        Value::ByteBuffer(_) => Kind::ByteBuffer,
        Value::Int8Array(_) => Kind::Int8Array,
        Value::Uint8Array(_) => Kind::Uint8Array,
        Value::Uint8ClampedArray(_) => Kind::Uint8ClampedArray,
        Value::Int16Array(_) => Kind::Int16Array,
        Value::Uint16Array(_) => Kind::Uint16Array,
        Value::Int32Array(_) => Kind::Int32Array,
        Value::Uint32Array(_) => Kind::Uint32Array,
        Value::Float32Array(_) => Kind::Float32Array,
        Value::Float64Array(_) => Kind::Float64Array,
        Value::BigInt64Array(_) => Kind::BigInt64Array,
        Value::BigUint64Array(_) => Kind::BigUint64Array,
        Value::DataView(_) => Kind::DataView,
        Value::ArrayBuffer(_) => Kind::ArrayBuffer,
        Value::SharedArrayBuffer(_) => Kind::SharedArrayBuffer,
        Value::Url(_) => Kind::Url,
        Value::UrlSearchParams(_) => Kind::UrlSearchParams,
        Value::Record(_) => Kind::Record,
        Value::Instance(instance) => {
            return Classification::Unrecognized {
                type_name: instance.type_name.clone(),
            }
        }
    };
    Classification::Known(kind)
}

/// Kind carried by a wire node
///
/// An envelope with a recognized tag reports that tag's kind; anything else
/// (including envelopes with unknown tags) is classified by its JSON shape.
pub fn classify_wire(wire: &serde_json::Value) -> Kind {
    if let Some(kind) = Envelope::parse(wire).and_then(|envelope| envelope.kind()) {
        return kind;
    }
    match wire {
        serde_json::Value::Null => Kind::Null,
        serde_json::Value::Bool(_) => Kind::Boolean,
        serde_json::Value::Number(_) => Kind::Number,
        serde_json::Value::String(_) => Kind::String,
        serde_json::Value::Array(_) => Kind::Array,
        serde_json::Value::Object(_) => Kind::Record,
    }
}

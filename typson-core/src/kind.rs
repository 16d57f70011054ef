//! The kind catalog
//!
//! Every value typson can carry belongs to exactly one [`Kind`]. The catalog is
//! closed: adding a kind is a wire-format change, so the enum is matched
//! exhaustively by both the encoder and decoder tables.
//!
//! # Wire tags
//!
//! Each kind has a stable wire tag ([`Kind::tag`]). For most kinds the tag is
//! the catalog name; two differ for compatibility with data written by earlier
//! producers:
//!
//! - [`Kind::ByteBuffer`] travels as `"Buffer"`
//! - [`Kind::Record`] is named `"Object"` (it never appears in an envelope)
//!
//! # Passthrough kinds
//!
//! `String`, `Boolean`, `Null`, `Array` and `Record` are JSON-native and never
//! wrapped in an envelope. A record tagged with one of these names is therefore
//! *not* an envelope and decodes as a plain record.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A value classification from the closed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    String,
    Boolean,
    Number,
    Undefined,
    Null,
    Symbol,
    BigInt,
    RegExp,
    Date,
    Url,
    UrlSearchParams,
    Map,
    Set,
    Function,
    Array,
    DataView,
    ArrayBuffer,
    SharedArrayBuffer,
    ByteBuffer,
    Int8Array,
    Uint8Array,
    Uint8ClampedArray,
    Int16Array,
    Uint16Array,
    Int32Array,
    Uint32Array,
    Float32Array,
    Float64Array,
    BigInt64Array,
    BigUint64Array,
    Record,
}

impl Kind {
    /// Every kind, in catalog order
    pub const ALL: [Kind; 31] = [
        Kind::String,
        Kind::Boolean,
        Kind::Number,
        Kind::Undefined,
        Kind::Null,
        Kind::Symbol,
        Kind::BigInt,
        Kind::RegExp,
        Kind::Date,
        Kind::Url,
        Kind::UrlSearchParams,
        Kind::Map,
        Kind::Set,
        Kind::Function,
        Kind::Array,
        Kind::DataView,
        Kind::ArrayBuffer,
        Kind::SharedArrayBuffer,
        Kind::ByteBuffer,
        Kind::Int8Array,
        Kind::Uint8Array,
        Kind::Uint8ClampedArray,
        Kind::Int16Array,
        Kind::Uint16Array,
        Kind::Int32Array,
        Kind::Uint32Array,
        Kind::Float32Array,
        Kind::Float64Array,
        Kind::BigInt64Array,
        Kind::BigUint64Array,
        Kind::Record,
    ];

    /// Classification priority, most specific first
    ///
    /// `ByteBuffer` precedes the typed-array family because a byte buffer is
    /// also structurally an unsigned-byte array. `Record` is the catch-all for
    /// plain key/value containers and therefore comes last.
    pub const CLASSIFY_ORDER: [Kind; 31] = [
        Kind::Null,
        Kind::String,
        Kind::Number,
        Kind::Boolean,
        Kind::Undefined,
        Kind::Symbol,
        Kind::BigInt,
        Kind::Function,
        Kind::RegExp,
        Kind::Date,
        Kind::Map,
        Kind::Set,
        Kind::Array,
        Kind::ByteBuffer,
        Kind::Int8Array,
        Kind::Uint8Array,
        Kind::Uint8ClampedArray,
        Kind::Int16Array,
        Kind::Uint16Array,
        Kind::Int32Array,
        Kind::Uint32Array,
        Kind::Float32Array,
        Kind::Float64Array,
        Kind::BigInt64Array,
        Kind::BigUint64Array,
        Kind::DataView,
        Kind::ArrayBuffer,
        Kind::SharedArrayBuffer,
        Kind::Url,
        Kind::UrlSearchParams,
        Kind::Record,
    ];

    /// Catalog name of the kind
    pub fn name(self) -> &'static str {
        match self {
            Kind::String => "String",
            Kind::Boolean => "Boolean",
            Kind::Number => "Number",
            Kind::Undefined => "Undefined",
            Kind::Null => "Null",
            Kind::Symbol => "Symbol",
            Kind::BigInt => "BigInt",
            Kind::RegExp => "RegExp",
            Kind::Date => "Date",
            Kind::Url => "URL",
            Kind::UrlSearchParams => "URLSearchParams",
            Kind::Map => "Map",
            Kind::Set => "Set",
            Kind::Function => "Function",
            Kind::Array => "Array",
            Kind::DataView => "DataView",
            Kind::ArrayBuffer => "ArrayBuffer",
            Kind::SharedArrayBuffer => "SharedArrayBuffer",
            Kind::ByteBuffer => "ByteBuffer",
            Kind::Int8Array => "Int8Array",
            Kind::Uint8Array => "Uint8Array",
            Kind::Uint8ClampedArray => "Uint8ClampedArray",
            Kind::Int16Array => "Int16Array",
            Kind::Uint16Array => "Uint16Array",
            Kind::Int32Array => "Int32Array",
            Kind::Uint32Array => "Uint32Array",
            Kind::Float32Array => "Float32Array",
            Kind::Float64Array => "Float64Array",
            Kind::BigInt64Array => "BigInt64Array",
            Kind::BigUint64Array => "BigUint64Array",
            Kind::Record => "Record",
        }
    }

    /// Wire tag written into the `__t` field of an envelope
    pub fn tag(self) -> &'static str {
        match self {
            Kind::ByteBuffer => "Buffer",
            Kind::Record => "Object",
            other => other.name(),
        }
    }

    /// Whether values of this kind travel inside a tagged envelope
    ///
    /// `Number` is tagged only for non-finite values, but it owns a decoder
    /// table entry, so it counts as tagged here.
    pub fn is_tagged(self) -> bool {
        !matches!(
            self,
            Kind::String | Kind::Boolean | Kind::Null | Kind::Array | Kind::Record
        )
    }

    /// Look up a tagged kind by its wire tag
    ///
    /// Returns `None` for unknown tags and for the tags of passthrough kinds:
    /// neither names an envelope the decoder should unwrap.
    pub fn from_tag(tag: &str) -> Option<Kind> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.is_tagged() && kind.tag() == tag)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    /// Accepts both catalog names and wire tags (`"ByteBuffer"` and `"Buffer"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s || kind.tag() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Kind catalog, value model and tagged-envelope codec for typson
//!
//! typson turns rich in-memory values into a JSON-safe wire form and back. It
//! covers the kinds plain JSON loses: NaN and the infinities, `undefined`,
//! big integers, dates, regular expressions, URLs, maps with non-string keys,
//! sets, binary buffers and typed arrays, DataViews, symbols and functions.
//!
//! - **Kind**: the closed catalog of value classifications ([`Kind`])
//! - **Value**: the in-memory value model ([`Value`]) and its classifier
//! - **Encoder / Decoder**: the per-kind tables, walking values and wire trees
//! - **Envelope**: the `{"__t": tag, "__v": payload}` wire protocol
//! - **Omit**: recursive pruning of envelopes of one kind
//! - **Observability**: `tracing` subscriber setup
//!
//! # Wire Form
//!
//! Strings, booleans, null, finite numbers, arrays and plain records pass
//! through as JSON. Every other kind becomes a two-field envelope:
//!
//! ```json
//! {"__t": "Set", "__v": [1, 2, {"__t": "BigInt", "__v": "3"}]}
//! ```
//!
//! Envelopes nest wherever the value nests. An envelope with a tag the decoder
//! does not know is decoded as an ordinary record, so data written by newer
//! producers still loads.
//!
//! # Example
//!
//! ```rust
//! use typson_core::{deserialize, serialize, Value};
//!
//! let value = Value::record([
//!     ("id", Value::BigInt("9007199254740993".parse().unwrap())),
//!     ("tags", Value::set(["a", "b"])),
//!     ("missing", Value::Undefined),
//! ]);
//!
//! let wire = serialize(&value).unwrap();
//! assert_eq!(wire["id"], serde_json::json!({"__t": "BigInt", "__v": "9007199254740993"}));
//!
//! assert_eq!(deserialize(&wire).unwrap(), value);
//! ```
//!
//! # Functions
//!
//! Functions are refused by default. `SerializeOptions::ignore_function`
//! drops them, `SerializeOptions::embed_function_source` writes their source
//! text. On the way back, Function envelopes are pruned unless
//! `DeserializeOptions::dangerously_deserialize_function` is set, and source is
//! only turned into code by a caller-supplied [`FunctionCompiler`].

pub mod classify;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod envelope;
pub mod error;
pub mod kind;
pub mod observability;
pub mod omit;
pub mod options;
pub mod path;
pub mod value;

pub use classify::{classify, classify_wire, Classification};
pub use codec::{
    deserialize, deserialize_with, parse, parse_with, serialize, serialize_with, stringify,
    stringify_with,
};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use kind::{Kind, UnknownKind};
pub use observability::{init_observability, ObservabilityConfig};
pub use omit::omit;
pub use options::{
    DeserializeOptions, EnvelopePolicy, FunctionCompiler, SerializeOptions, UnsupportedPolicy,
};
pub use value::{DataView, Function, Instance, NativeFn, Record, RegExp, SearchParams, Symbol, Value};

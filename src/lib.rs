//! typson - typed values over plain JSON
//!
//! This is the convenience crate that re-exports the typson sub-crates. Use it
//! when you want one dependency for the codec and the derive macro.
//!
//! # Architecture
//!
//! - **typson-core**: kind catalog, value model, encoder/decoder, omit
//!   transform, error handling, observability
//! - **typson-macros**: `#[derive(IntoValue)]` for building values from structs
//!
//! # Quick Start
//!
//! ```rust
//! use typson::{parse, stringify, Value};
//!
//! let value = Value::map([
//!     (Value::from(1), Value::from("one")),
//!     (Value::from(f64::INFINITY), Value::from("big")),
//! ]);
//!
//! let text = stringify(&value).unwrap();
//! assert_eq!(
//!     text,
//!     r#"{"__t":"Map","__v":[[1,"one"],[{"__t":"Number","__v":"infinity"},"big"]]}"#
//! );
//! assert_eq!(parse(&text).unwrap(), value);
//! ```
//!
//! # Deriving Values
//!
//! ```rust
//! use typson::{IntoValue, Value};
//!
//! #[derive(IntoValue)]
//! #[typson(crate = "::typson::core")]
//! struct Reading {
//!     sensor: String,
//!     value: f64,
//! }
//!
//! let value = Value::from(Reading { sensor: "t1".into(), value: f64::NAN });
//! let wire = typson::serialize(&value).unwrap();
//! assert_eq!(wire["value"], serde_json::json!({"__t": "Number", "__v": "nan"}));
//! ```

pub use typson_core as core;
pub use typson_macros as macros;

// Convenience re-exports of the most commonly used items
pub use typson_core::{
    deserialize, deserialize_with, init_observability, omit, parse, parse_with, serialize,
    serialize_with, stringify, stringify_with, DeserializeOptions, EnvelopePolicy, Error, Kind,
    ObservabilityConfig, Result, SerializeOptions, UnsupportedPolicy, Value,
};
pub use typson_macros::IntoValue;

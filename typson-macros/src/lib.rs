//! Procedural macros for typson
//!
//! # Available Macros
//!
//! ## `#[derive(IntoValue)]` - Struct to Value Conversion
//!
//! Implements `From<YourStruct> for typson_core::Value`, so plain Rust data
//! can be handed to the codec without building records by hand:
//!
//! - named-field structs become a `Value::Record` with fields in declaration
//!   order
//! - tuple structs become a `Value::Array`
//! - unit structs become an empty record
//!
//! Every field type must implement `Into<Value>`, which covers primitives,
//! strings, `Vec<T>`, `Option<T>` (None becomes Undefined), dates, URLs, big
//! integers, and other structs deriving `IntoValue`.
//!
//! # Attributes
//!
//! - `#[typson(rename = "name")]` on a field: use a different record key
//! - `#[typson(skip)]` on a field: leave it out
//! - `#[typson(crate = "path")]` on the struct: where `typson_core` lives
//!   (default `::typson_core`; use `"::typson::core"` when depending only on
//!   the `typson` crate)
//!
//! # Examples
//!
//! ```ignore
//! use typson_core::Value;
//! use typson_macros::IntoValue;
//!
//! #[derive(IntoValue)]
//! struct Event {
//!     name: String,
//!     #[typson(rename = "at")]
//!     timestamp: chrono::DateTime<chrono::Utc>,
//!     #[typson(skip)]
//!     cache: Vec<u8>,
//! }
//!
//! let value = Value::from(event);
//! let wire = typson_core::serialize(&value)?;
//! ```
//!
//! Enums and unions are rejected at compile time; there is no single record
//! shape for them.

mod derive;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive `From<T> for typson_core::Value` for a struct
#[proc_macro_derive(IntoValue, attributes(typson))]
pub fn derive_into_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::into_value_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

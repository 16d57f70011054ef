//! Codec options
//!
//! Options are plain structs with builder methods. `Default` gives the safe
//! behaviour everywhere:
//!
//! - functions are rejected on encode and pruned on decode
//! - values outside the catalog fail the encode
//! - a recognized envelope with a bad payload fails the decode
//!
//! # Examples
//!
//! ```rust
//! use typson_core::{SerializeOptions, UnsupportedPolicy};
//!
//! let options = SerializeOptions::new()
//!     .ignore_function(true)
//!     .unsupported(UnsupportedPolicy::Passthrough);
//! assert!(options.ignore_function);
//! ```

use crate::error::Result;
use crate::value::Function;
use std::fmt;
use std::sync::Arc;

/// What the encoder does with a value outside the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Raise `Error::UnsupportedKind` with the value's path
    #[default]
    Fail,
    /// Encode the value's own fields as a plain record
    Passthrough,
}

/// What the decoder does with a recognized tag carrying a bad payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopePolicy {
    /// Raise `Error::MalformedEnvelope`
    #[default]
    Strict,
    /// Decode the node as a plain record instead
    Lenient,
}

/// Options for `serialize` and `stringify`
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    /// Prune every Function from the output, at any depth
    pub ignore_function: bool,
    /// Emit Function envelopes carrying source text instead of failing
    ///
    /// Source text is code. Only enable this when the consumer is trusted to
    /// handle it.
    pub embed_function_source: bool,
    pub unsupported: UnsupportedPolicy,
    /// Encode negative infinity as `"-infinity"` instead of `"infinity"`
    pub preserve_infinity_sign: bool,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_function(mut self, ignore: bool) -> Self {
        self.ignore_function = ignore;
        self
    }

    pub fn embed_function_source(mut self, embed: bool) -> Self {
        self.embed_function_source = embed;
        self
    }

    pub fn unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }

    pub fn preserve_infinity_sign(mut self, preserve: bool) -> Self {
        self.preserve_infinity_sign = preserve;
        self
    }

    /// Whether the encoder turns functions into envelopes instead of failing
    pub(crate) fn encodes_functions(&self) -> bool {
        self.ignore_function || self.embed_function_source
    }
}

/// Turns stored function source back into a callable
///
/// This is the only path by which decoded data becomes executable. Implement
/// it on top of a scripting host that can sandbox the code.
pub trait FunctionCompiler: Send + Sync {
    fn compile(&self, source: &str) -> Result<Function>;
}

/// Options for `deserialize` and `parse`
#[derive(Clone, Default)]
pub struct DeserializeOptions {
    /// Decode Function envelopes instead of pruning them
    ///
    /// Without a [`FunctionCompiler`] the decoded functions are opaque (source
    /// text only). With one, the stored source is compiled into live code,
    /// which runs whatever the producer wrote.
    pub dangerously_deserialize_function: bool,
    pub function_compiler: Option<Arc<dyn FunctionCompiler>>,
    pub envelopes: EnvelopePolicy,
}

impl DeserializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dangerously_deserialize_function(mut self, enable: bool) -> Self {
        self.dangerously_deserialize_function = enable;
        self
    }

    pub fn function_compiler(mut self, compiler: Arc<dyn FunctionCompiler>) -> Self {
        self.function_compiler = Some(compiler);
        self
    }

    pub fn envelopes(mut self, policy: EnvelopePolicy) -> Self {
        self.envelopes = policy;
        self
    }
}

impl fmt::Debug for DeserializeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeserializeOptions")
            .field(
                "dangerously_deserialize_function",
                &self.dangerously_deserialize_function,
            )
            .field("function_compiler", &self.function_compiler.is_some())
            .field("envelopes", &self.envelopes)
            .finish()
    }
}

//! Tagged envelope protocol
//!
//! A wire node is either JSON-native passthrough or a tagged envelope: an
//! object with exactly two fields, the kind tag and the payload.
//!
//! ```json
//! {"__t": "Date", "__v": 1600000000000}
//! ```
//!
//! Objects with any other shape (extra fields, a non-string tag) are plain
//! records, even when they contain `__t`. The decoder also reads the
//! `__type`/`__value` field names written by earlier producers; the encoder
//! only writes `__t`/`__v`.

use crate::kind::Kind;
use serde_json::{Map, Value as Json};

/// Field holding the kind tag
pub const TAG_FIELD: &str = "__t";

/// Field holding the kind-specific payload
pub const PAYLOAD_FIELD: &str = "__v";

/// Tag field name used by earlier producers (read-only)
pub const LEGACY_TAG_FIELD: &str = "__type";

/// Payload field name used by earlier producers (read-only)
pub const LEGACY_PAYLOAD_FIELD: &str = "__value";

/// Borrowed view of an envelope-shaped wire node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope<'a> {
    /// Raw tag, which may name no known kind
    pub tag: &'a str,
    pub payload: &'a Json,
}

impl<'a> Envelope<'a> {
    /// View `wire` as an envelope, if it has the two-field shape
    pub fn parse(wire: &'a Json) -> Option<Self> {
        let fields = wire.as_object()?;
        if fields.len() != 2 {
            return None;
        }
        [
            (TAG_FIELD, PAYLOAD_FIELD),
            (LEGACY_TAG_FIELD, LEGACY_PAYLOAD_FIELD),
        ]
        .iter()
        .find_map(|(tag_field, payload_field)| {
            let tag = fields.get(*tag_field)?.as_str()?;
            let payload = fields.get(*payload_field)?;
            Some(Envelope { tag, payload })
        })
    }

    /// The tagged kind, if the tag names a decoder table entry
    pub fn kind(&self) -> Option<Kind> {
        Kind::from_tag(self.tag)
    }
}

/// Wrap a payload in an envelope tagged with `kind`
pub fn wrap(kind: Kind, payload: impl Into<Json>) -> Json {
    let mut fields = Map::with_capacity(2);
    fields.insert(TAG_FIELD.to_string(), Json::String(kind.tag().to_string()));
    fields.insert(PAYLOAD_FIELD.to_string(), payload.into());
    Json::Object(fields)
}

/// Whether `wire` is an envelope tagged with `kind`
pub fn is_tagged_as(wire: &Json, kind: Kind) -> bool {
    Envelope::parse(wire).is_some_and(|envelope| envelope.tag == kind.tag())
}

/// The Undefined envelope, also the wire form of "absent"
pub fn undefined() -> Json {
    wrap(Kind::Undefined, "undefined")
}

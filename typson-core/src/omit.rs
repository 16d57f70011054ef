//! Prune transform over wire trees
//!
//! [`omit`] removes every envelope tagged with a kind, at any depth: array
//! elements, record fields, Set members and Map entries. A removed node is
//! dropped whole, so nothing below it is visited. Envelopes of other kinds are
//! kept as they are, except Map and Set whose payloads are walked.
//!
//! The serializer uses this to implement `ignore_function`, and the
//! deserializer to strip functions before decoding.

use crate::envelope::{is_tagged_as, wrap, Envelope};
use crate::kind::Kind;
use serde_json::Value as Json;
use tracing::debug;

/// Remove every `kind` envelope from `wire`
///
/// Returns `None` when `wire` itself is tagged with `kind`.
pub fn omit(wire: &Json, kind: Kind) -> Option<Json> {
    if is_tagged_as(wire, kind) {
        debug!(kind = %kind, "pruned envelope");
        return None;
    }
    Some(prune(wire, kind))
}

fn prune(wire: &Json, kind: Kind) -> Json {
    if let Some(envelope) = Envelope::parse(wire) {
        match (envelope.kind(), envelope.payload) {
            (Some(Kind::Map), Json::Array(entries)) => {
                let kept: Vec<Json> = entries
                    .iter()
                    .filter_map(|entry| prune_entry(entry, kind))
                    .collect();
                return wrap(Kind::Map, kept);
            }
            (Some(Kind::Set), Json::Array(members)) => {
                return wrap(Kind::Set, prune_items(members, kind));
            }
            // other envelopes carry no nested wire values
            (Some(_), _) => return wire.clone(),
            (None, _) => {}
        }
    }
    match wire {
        Json::Array(items) => Json::Array(prune_items(items, kind)),
        Json::Object(fields) => Json::Object(
            fields
                .iter()
                .filter_map(|(key, field)| omit(field, kind).map(|field| (key.clone(), field)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn prune_items(items: &[Json], kind: Kind) -> Vec<Json> {
    items.iter().filter_map(|item| omit(item, kind)).collect()
}

/// A `[key, value]` pair survives only if neither side is pruned
fn prune_entry(entry: &Json, kind: Kind) -> Option<Json> {
    match entry.as_array().map(Vec::as_slice) {
        Some([key, value]) => Some(Json::Array(vec![omit(key, kind)?, omit(value, kind)?])),
        _ => Some(entry.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn func() -> Json {
        json!({"__t": "Function", "__v": "() => {}"})
    }

    fn omit_fn(wire: Json) -> Option<Json> {
        omit(&wire, Kind::Function)
    }

    #[test]
    fn test_scalars_unchanged() {
        for wire in [json!("a"), json!(0), json!(1), json!(true), json!(null)] {
            assert_eq!(omit_fn(wire.clone()), Some(wire));
        }
    }

    #[test]
    fn test_root_envelope_is_absent() {
        assert_eq!(omit_fn(func()), None);
        assert_eq!(
            omit(&func(), Kind::Date),
            Some(func()),
            "other kinds are left alone"
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(omit_fn(json!([1, 2, 3])), Some(json!([1, 2, 3])));
        assert_eq!(omit_fn(json!([func(), func(), 1])), Some(json!([1])));
        assert_eq!(
            omit_fn(json!([func(), func(), [func(), func(), [func(), func()]]])),
            Some(json!([[[]]]))
        );
    }

    #[test]
    fn test_records() {
        assert_eq!(omit_fn(json!({"a": 1, "b": 2})), Some(json!({"a": 1, "b": 2})));
        assert_eq!(omit_fn(json!({"a": func(), "b": 1})), Some(json!({"b": 1})));
        assert_eq!(
            omit_fn(json!({"a": func(), "b": {"c": func(), "d": {"e": func()}}})),
            Some(json!({"b": {"d": {}}}))
        );
    }

    #[test]
    fn test_sets() {
        let set = json!({"__t": "Set", "__v": [{"__t": "Number", "__v": "nan"}]});
        assert_eq!(omit_fn(set.clone()), Some(set.clone()));

        let with_fn = json!({"__t": "Set", "__v": [{"__t": "Number", "__v": "nan"}, func()]});
        assert_eq!(omit_fn(with_fn), Some(set));

        let nested = json!({"__t": "Set", "__v": [{"__t": "Set", "__v": [{"__t": "Set", "__v": [func()]}]}]});
        assert_eq!(
            omit_fn(nested),
            Some(json!({"__t": "Set", "__v": [{"__t": "Set", "__v": [{"__t": "Set", "__v": []}]}]}))
        );
    }

    #[test]
    fn test_maps() {
        let map = json!({"__t": "Map", "__v": [["a", "b"]]});
        assert_eq!(omit_fn(map.clone()), Some(map));

        assert_eq!(
            omit_fn(json!({"__t": "Map", "__v": [["a", func()]]})),
            Some(json!({"__t": "Map", "__v": []}))
        );
        assert_eq!(
            omit_fn(json!({"__t": "Map", "__v": [[func(), 1]]})),
            Some(json!({"__t": "Map", "__v": []}))
        );
        assert_eq!(
            omit_fn(json!({"__t": "Map", "__v": [["a", {"__t": "Map", "__v": [["a", func()]]}]]})),
            Some(json!({"__t": "Map", "__v": [["a", {"__t": "Map", "__v": []}]]}))
        );
    }

    #[test]
    fn test_other_envelopes_are_opaque() {
        let data_view = json!({"__t": "DataView", "__v": {"buffer": [], "byteOffset": 0, "byteLength": 0}});
        assert_eq!(omit_fn(data_view.clone()), Some(data_view));
    }

    #[test]
    fn test_unknown_envelope_is_a_record() {
        assert_eq!(
            omit_fn(json!({"__t": "Unknown", "__v": func()})),
            Some(json!({"__t": "Unknown"}))
        );
    }
}

//! Encoding of nested structures, idempotence and text output

use pretty_assertions::assert_eq;
use serde_json::json;
use typson_core::{
    serialize, serialize_with, stringify, DataView, Error, Instance, Record, SearchParams,
    SerializeOptions, Value,
};
use url::Url;

#[test]
fn test_nested_array() {
    let value = Value::array([
        Value::from(f64::NAN),
        Value::from(f64::INFINITY),
        Value::from("s"),
        Value::from(1),
        Value::from(2),
        Value::from(true),
        Value::array([
            Value::from(false),
            Value::record([("a", Value::from(true)), ("b", Value::BigInt(2.into()))]),
        ]),
    ]);

    assert_eq!(
        serialize(&value).unwrap(),
        json!([
            {"__t": "Number", "__v": "nan"},
            {"__t": "Number", "__v": "infinity"},
            "s",
            1,
            2,
            true,
            [false, {"a": true, "b": {"__t": "BigInt", "__v": "2"}}]
        ])
    );
}

#[test]
fn test_nested_containers() {
    let inner = Value::map([
        (
            Value::from("c"),
            Value::array([Value::from(0), Value::from(1), Value::Undefined]),
        ),
        (
            Value::from("d"),
            Value::map([
                (Value::from("e"), Value::from(10)),
                (Value::from("f"), Value::set(["g"])),
            ]),
        ),
    ]);
    let value = Value::record([
        ("bool", Value::from(true)),
        ("set", Value::set([true])),
        (
            "map",
            Value::map([
                (Value::from("a"), Value::from(true)),
                (Value::from("b"), Value::set([inner])),
            ]),
        ),
    ]);

    assert_eq!(
        serialize(&value).unwrap(),
        json!({
            "bool": true,
            "set": {"__t": "Set", "__v": [true]},
            "map": {"__t": "Map", "__v": [
                ["a", true],
                ["b", {"__t": "Set", "__v": [
                    {"__t": "Map", "__v": [
                        ["c", [0, 1, {"__t": "Undefined", "__v": "undefined"}]],
                        ["d", {"__t": "Map", "__v": [
                            ["e", 10],
                            ["f", {"__t": "Set", "__v": ["g"]}]
                        ]}]
                    ]}
                ]}]
            ]}
        })
    );
}

#[test]
fn test_encoding_is_idempotent() {
    let value = Value::record([
        ("a", Value::array([0, 1, 2])),
        (
            "b",
            Value::record([(
                "c",
                Value::map([(
                    Value::from("d"),
                    Value::array([Value::record([
                        ("e", Value::from(true)),
                        ("f", Value::set(["g"])),
                    ])]),
                )]),
            )]),
        ),
    ]);
    let expected = json!({
        "a": [0, 1, 2],
        "b": {"c": {"__t": "Map", "__v": [["d", [{"e": true, "f": {"__t": "Set", "__v": ["g"]}}]]]}}
    });

    let once = serialize(&value).unwrap();
    let twice = serialize(&Value::from_json(&once)).unwrap();
    let thrice = serialize(&Value::from_json(&twice)).unwrap();
    assert_eq!(once, expected);
    assert_eq!(twice, expected);
    assert_eq!(thrice, expected);
}

#[test]
fn test_empty_containers() {
    assert_eq!(serialize(&Value::array(Vec::<Value>::new())).unwrap(), json!([]));
    assert_eq!(serialize(&Value::Record(Record::new())).unwrap(), json!({}));
    assert_eq!(
        serialize(&Value::Set(vec![])).unwrap(),
        json!({"__t": "Set", "__v": []})
    );
    assert_eq!(
        serialize(&Value::Map(vec![])).unwrap(),
        json!({"__t": "Map", "__v": []})
    );
    assert_eq!(
        serialize(&Value::BigInt64Array(vec![0])).unwrap(),
        json!({"__t": "BigInt64Array", "__v": ["0"]})
    );
}

#[test]
fn test_web_kinds() {
    let url = Url::parse("http://a/").unwrap();
    assert_eq!(
        serialize(&Value::from(url)).unwrap(),
        json!({"__t": "URL", "__v": "http://a/"})
    );

    let params: SearchParams = [("q", "test")].into_iter().collect();
    assert_eq!(
        serialize(&Value::from(params)).unwrap(),
        json!({"__t": "URLSearchParams", "__v": "q=test"})
    );

    assert_eq!(
        serialize(&Value::from(DataView::from_buffer(vec![0]))).unwrap(),
        json!({"__t": "DataView", "__v": {"buffer": [0], "byteOffset": 0, "byteLength": 1}})
    );
}

#[test]
fn test_stringify_undefined_field() {
    let value = Value::record([("a", Value::Undefined)]);
    assert_eq!(
        stringify(&value).unwrap(),
        r#"{"a":{"__t":"Undefined","__v":"undefined"}}"#
    );
}

#[test]
fn test_function_error_names_the_value() {
    let err = serialize(&Value::function("() => {}")).unwrap_err();
    assert_eq!(err.to_string(), "Function can't be serialized (at $)");
}

#[test]
fn test_deep_unsupported_value_reports_path() {
    let socket = Value::Instance(Instance::new("Socket", Record::new()));
    let value = Value::record([(
        "o",
        Value::record([(
            "b",
            Value::array([Value::from(0), Value::from(1), Value::record([("c", socket)])]),
        )]),
    )]);

    match serialize(&value).unwrap_err() {
        Error::UnsupportedKind { description, path } => {
            assert_eq!(description, "instance of Socket");
            assert_eq!(path, "$.o.b[2].c");
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_embedded_function_source() {
    let options = SerializeOptions::new().embed_function_source(true);
    let value = Value::record([("f", Value::function("async () => {}"))]);
    assert_eq!(
        serialize_with(&value, &options).unwrap(),
        json!({"f": {"__t": "Function", "__v": "async () => {}"}})
    );
}

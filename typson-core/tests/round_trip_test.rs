//! Round-trip and idempotence properties

use bytes::Bytes;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use typson_core::{
    deserialize, parse, serialize, stringify, DataView, RegExp, SearchParams, Symbol, Value,
};
use url::Url;

fn json_native() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1_000_000_000i64..1_000_000_000).prop_map(Value::from),
        // quarters print and parse exactly
        (-4_000_000i32..4_000_000).prop_map(|n| Value::from(f64::from(n) / 4.0)),
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|fields| Value::record(fields)),
        ]
    })
}

fn rich() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::from(f64::INFINITY)),
        any::<i64>().prop_map(|n| Value::BigInt(BigInt::from(n) * BigInt::from(1_000_000_007u32))),
        (-10_000_000_000_000i64..10_000_000_000_000)
            .prop_map(|ms| Value::date_millis(ms).unwrap_or(Value::Null)),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(|b| Value::ByteBuffer(Bytes::from(b))),
        prop::collection::vec(any::<i16>(), 0..8).prop_map(Value::Int16Array),
        prop::collection::vec(any::<u64>(), 0..4).prop_map(Value::BigUint64Array),
        prop::collection::vec((-4000i16..4000).prop_map(|n| f32::from(n) / 4.0), 0..4)
            .prop_map(Value::Float32Array),
        json_native(),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|members| Value::set(members)),
            prop::collection::vec((inner.clone(), inner.clone()), 0..4).prop_map(|entries| Value::map(entries)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(|fields| Value::record(fields)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_json_native_round_trip(value in json_native()) {
        let wire = serialize(&value).unwrap();
        prop_assert_eq!(deserialize(&wire).unwrap(), value);
    }

    #[test]
    fn prop_encoding_json_native_is_stable(value in json_native()) {
        let once = serialize(&value).unwrap();
        let twice = serialize(&Value::from_json(&once)).unwrap();
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(serialize(&Value::from_json(&twice)).unwrap(), once);
    }

    #[test]
    fn prop_rich_round_trip(value in rich()) {
        let text = stringify(&value).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), value);
    }
}

#[test]
fn test_every_non_function_kind_round_trips() {
    let values = vec![
        Value::from("s"),
        Value::from(true),
        Value::from(-0.25),
        Value::from(f64::INFINITY),
        Value::Undefined,
        Value::Null,
        Value::BigInt("-123456789012345678901234567890".parse().unwrap()),
        Value::from(RegExp::new(r"\([abc\(].*?", "gi").unwrap()),
        Value::date_millis(1_600_000_000_000).unwrap(),
        Value::from(Url::parse("https://example.com/a?b=c#d").unwrap()),
        Value::from(SearchParams::parse("q=a+b&q=%26&empty=")),
        Value::map([
            (Value::from(1), Value::from("number key")),
            (Value::array([1, 2]), Value::from("array key")),
            (Value::Undefined, Value::Null),
        ]),
        Value::set([Value::from(1), Value::from("1"), Value::BigInt(1.into())]),
        Value::array([Value::from(1), Value::Undefined]),
        Value::record([("nested", Value::record([("deep", Value::Undefined)]))]),
        Value::from(DataView::new(vec![1, 2, 3, 4, 5], 1, 3).unwrap()),
        Value::ArrayBuffer(vec![0, 255]),
        Value::SharedArrayBuffer(vec![7]),
        Value::from(Bytes::from_static(b"abc")),
        Value::Int8Array(vec![i8::MIN, i8::MAX]),
        Value::Uint8Array(vec![u8::MAX]),
        Value::Uint8ClampedArray(vec![0, 255]),
        Value::Int16Array(vec![i16::MIN]),
        Value::Uint16Array(vec![u16::MAX]),
        Value::Int32Array(vec![i32::MIN, i32::MAX]),
        Value::Uint32Array(vec![u32::MAX]),
        Value::Float32Array(vec![0.5, -1.25]),
        Value::Float64Array(vec![std::f64::consts::PI, -0.5]),
        Value::BigInt64Array(vec![i64::MIN, i64::MAX]),
        Value::BigUint64Array(vec![u64::MAX]),
    ];

    for value in values {
        let wire = serialize(&value).unwrap();
        assert_eq!(deserialize(&wire).unwrap(), value, "wire form {}", wire);
    }
}

#[test]
fn test_non_finite_typed_array_elements() {
    let wire = serialize(&Value::Float64Array(vec![1.0, f64::NAN, f64::NEG_INFINITY])).unwrap();
    match deserialize(&wire).unwrap() {
        Value::Float64Array(items) => {
            assert_eq!(items[0], 1.0);
            assert!(items[1].is_nan());
            assert!(items[2].is_nan());
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_nan_and_negative_infinity() {
    assert!(deserialize(&serialize(&Value::from(f64::NAN)).unwrap())
        .unwrap()
        .is_nan());
    // the sign is dropped unless preserve_infinity_sign is set
    assert_eq!(
        deserialize(&serialize(&Value::from(f64::NEG_INFINITY)).unwrap()).unwrap(),
        Value::from(f64::INFINITY)
    );
}

#[test]
fn test_symbol_identity_is_not_preserved() {
    let symbol = Symbol::new("id");
    let decoded = deserialize(&serialize(&Value::from(symbol.clone())).unwrap()).unwrap();
    match decoded {
        Value::Symbol(fresh) => {
            assert_ne!(fresh, symbol);
            assert_eq!(fresh.description(), symbol.description());
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_set_and_map_keep_repeated_containers() {
    let values = [
        Value::Set(vec![Value::array([1]), Value::array([1])]),
        Value::Map(vec![
            (Value::record([("a", 1)]), Value::from(1)),
            (Value::record([("a", 1)]), Value::from(2)),
        ]),
    ];
    for value in values {
        let text = stringify(&value).unwrap();
        assert_eq!(parse(&text).unwrap(), value, "wire form {}", text);
    }
}

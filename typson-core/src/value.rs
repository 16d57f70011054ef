//! In-memory value model
//!
//! [`Value`] has one variant per [`Kind`] in the catalog, plus
//! [`Value::Instance`] for host objects with a class-instance shape that the
//! catalog does not recognize. Containers (`Array`, `Record`, `Map`, `Set`)
//! nest arbitrarily; cycles cannot be expressed because children are owned.
//!
//! # Equality
//!
//! `PartialEq` is structural with two exceptions that mirror the values being
//! modelled:
//!
//! - numbers follow IEEE-754, so `NaN != NaN`
//! - a [`Symbol`] equals only clones of the same handle
//!
//! Records compare as maps (key order is ignored by `==`, but preserved by
//! iteration and by the codec).

use crate::error::{Error, Result};
use crate::kind::Kind;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use url::Url;

/// Plain key/value object, in enumeration order
pub type Record = IndexMap<String, Value>;

/// Host callable backing a [`Function`]
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// A value of any kind in the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Number(f64),
    Undefined,
    Null,
    Symbol(Symbol),
    BigInt(BigInt),
    RegExp(RegExp),
    Date(DateTime<Utc>),
    Url(Url),
    UrlSearchParams(SearchParams),
    /// Entries in insertion order
    Map(Vec<(Value, Value)>),
    /// Members in insertion order
    Set(Vec<Value>),
    Function(Function),
    Array(Vec<Value>),
    DataView(DataView),
    ArrayBuffer(Vec<u8>),
    SharedArrayBuffer(Vec<u8>),
    ByteBuffer(Bytes),
    Int8Array(Vec<i8>),
    Uint8Array(Vec<u8>),
    Uint8ClampedArray(Vec<u8>),
    Int16Array(Vec<i16>),
    Uint16Array(Vec<u16>),
    Int32Array(Vec<i32>),
    Uint32Array(Vec<u32>),
    Float32Array(Vec<f32>),
    Float64Array(Vec<f64>),
    BigInt64Array(Vec<i64>),
    BigUint64Array(Vec<u64>),
    Record(Record),
    /// Host object outside the catalog; classifies as unrecognized
    Instance(Instance),
}

impl Value {
    /// Kind of this value, or `None` for an unrecognized instance
    pub fn kind(&self) -> Option<Kind> {
        crate::classify::classify(self).kind()
    }

    /// Build a record from key/value pairs, keeping their order
    ///
    /// A repeated key overwrites the earlier value but keeps its position.
    pub fn record<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from items
    pub fn array<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Value {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a map with insertion-ordered, unique keys
    ///
    /// Keys follow `Map` key equality: primitives (strings, booleans,
    /// numbers, bigints, `undefined`, `null`, symbols) compare by value, with
    /// `NaN` equal to itself and `-0` equal to `0`. Every other key is a
    /// distinct object, so two equal-looking arrays are two keys.
    /// Re-inserting a primitive key replaces the value in place, the same way
    /// a `Map.set` on an existing key does.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Value
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut out: Vec<(Value, Value)> = Vec::new();
        let mut seen: HashMap<SameValue, usize> = HashMap::new();
        for (k, v) in entries {
            let (k, v) = (k.into(), v.into());
            match SameValue::of(&k) {
                Some(key) => match seen.entry(key) {
                    Entry::Occupied(slot) => out[*slot.get()].1 = v,
                    Entry::Vacant(slot) => {
                        slot.insert(out.len());
                        out.push((k, v));
                    }
                },
                None => out.push((k, v)),
            }
        }
        Value::Map(out)
    }

    /// Build a set with insertion-ordered members
    ///
    /// Duplicate primitives are dropped under the same equality as
    /// [`Value::map`] keys; containers and other objects are always kept.
    pub fn set<V: Into<Value>>(members: impl IntoIterator<Item = V>) -> Value {
        let mut out: Vec<Value> = Vec::new();
        let mut seen: HashSet<SameValue> = HashSet::new();
        for member in members {
            let member = member.into();
            let fresh = match SameValue::of(&member) {
                Some(key) => seen.insert(key),
                None => true,
            };
            if fresh {
                out.push(member);
            }
        }
        Value::Set(out)
    }

    /// An opaque function carrying only its source text
    pub fn function(source: impl Into<String>) -> Value {
        Value::Function(Function::opaque(source))
    }

    /// A date from epoch milliseconds, if in range
    pub fn date_millis(millis: i64) -> Option<Value> {
        DateTime::from_timestamp_millis(millis).map(Value::Date)
    }

    /// Structural conversion of a JSON tree
    ///
    /// No envelope is interpreted: `{"__t": "Date", "__v": 0}` becomes a record
    /// with two fields. Use [`crate::deserialize`] to decode wire forms.
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Array(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(fields) => Value::Record(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Short human-readable description, used in error messages
    pub fn describe(&self) -> String {
        match self {
            Value::Instance(instance) => format!("instance of {}", instance.type_name),
            other => other
                .kind()
                .map(|kind| kind.name().to_string())
                .unwrap_or_else(|| "unknown value".to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for a `Number` holding NaN
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Look up a record field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_record().and_then(|record| record.get(key))
    }
}

/// Hashable identity of a primitive `Map` key or `Set` member
#[derive(PartialEq, Eq, Hash)]
enum SameValue {
    String(String),
    Boolean(bool),
    Number(u64),
    BigInt(BigInt),
    Undefined,
    Null,
    Symbol(usize),
}

impl SameValue {
    fn of(value: &Value) -> Option<SameValue> {
        let key = match value {
            Value::String(s) => SameValue::String(s.clone()),
            Value::Boolean(b) => SameValue::Boolean(*b),
            Value::Number(n) if n.is_nan() => SameValue::Number(f64::NAN.to_bits()),
            // -0 and 0 are the same key
            Value::Number(n) => SameValue::Number((n + 0.0).to_bits()),
            Value::BigInt(n) => SameValue::BigInt(n.clone()),
            Value::Undefined => SameValue::Undefined,
            Value::Null => SameValue::Null,
            Value::Symbol(symbol) => SameValue::Symbol(Arc::as_ptr(&symbol.0) as usize),
            _ => return None,
        };
        Some(key)
    }
}

/// Unique-identity value carrying an optional description
///
/// Identity survives cloning but not a trip through the wire: decoding yields
/// a fresh symbol with the same description.
#[derive(Clone)]
pub struct Symbol(Arc<Option<String>>);

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Symbol(Arc::new(Some(description.into())))
    }

    /// A symbol without a description
    pub fn anonymous() -> Self {
        Symbol(Arc::new(None))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// Flags in canonical order
const REGEXP_FLAGS: &str = "dgimsuvy";

/// Regular expression kept as its `source` and `flags` strings
///
/// The pattern text is carried verbatim; it is only interpreted by
/// [`RegExp::to_regex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    /// Create a regular expression, normalizing the flag order
    ///
    /// Fails on unknown or repeated flags.
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self> {
        let mut seen = [false; 8];
        for c in flags.chars() {
            let index = REGEXP_FLAGS
                .find(c)
                .ok_or_else(|| Error::invalid(Kind::RegExp, format!("invalid flag '{}'", c)))?;
            if seen[index] {
                return Err(Error::invalid(
                    Kind::RegExp,
                    format!("duplicate flag '{}'", c),
                ));
            }
            seen[index] = true;
        }
        let flags = REGEXP_FLAGS
            .chars()
            .zip(seen)
            .filter_map(|(c, on)| on.then_some(c))
            .collect();
        Ok(Self {
            source: source.into(),
            flags,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// Compile into a [`regex::Regex`]
    ///
    /// `i`, `m` and `s` map onto the builder options. `g`, `y`, `d`, `u` and `v`
    /// affect matching state or are implied by the regex crate, so they are
    /// accepted and ignored. Patterns using syntax the regex crate lacks
    /// (lookaround, backreferences) fail here.
    pub fn to_regex(&self) -> Result<regex::Regex> {
        regex::RegexBuilder::new(&self.source)
            .case_insensitive(self.has_flag('i'))
            .multi_line(self.has_flag('m'))
            .dot_matches_new_line(self.has_flag('s'))
            .build()
            .map_err(|e| Error::invalid(Kind::RegExp, e.to_string()))
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Ordered name/value pairs of a URL query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams(Vec<(String, String)>);

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string; a leading `?` is ignored
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        SearchParams(
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        )
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// First value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchParams {
    /// Canonical `application/x-www-form-urlencoded` form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish();
        f.write_str(&encoded)
    }
}

impl FromStr for SearchParams {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SearchParams::parse(s))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SearchParams(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A window onto a byte buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataView {
    buffer: Vec<u8>,
    byte_offset: usize,
    byte_length: usize,
}

impl DataView {
    /// Create a view; the window must lie inside the buffer
    pub fn new(buffer: Vec<u8>, byte_offset: usize, byte_length: usize) -> Result<Self> {
        let end = byte_offset
            .checked_add(byte_length)
            .ok_or_else(|| Error::invalid(Kind::DataView, "view length overflows"))?;
        if end > buffer.len() {
            return Err(Error::invalid(
                Kind::DataView,
                format!(
                    "view {}..{} exceeds buffer of {} bytes",
                    byte_offset,
                    end,
                    buffer.len()
                ),
            ));
        }
        Ok(Self {
            buffer,
            byte_offset,
            byte_length,
        })
    }

    /// A view over the whole buffer
    pub fn from_buffer(buffer: Vec<u8>) -> Self {
        let byte_length = buffer.len();
        Self {
            buffer,
            byte_offset: 0,
            byte_length,
        }
    }

    /// The entire underlying buffer
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// The bytes inside the window
    pub fn bytes(&self) -> &[u8] {
        &self.buffer[self.byte_offset..self.byte_offset + self.byte_length]
    }
}

/// A callable value
///
/// Functions always carry their source text, which is what goes on the wire.
/// A host callable is attached only by the code that built the function, or by
/// a [`crate::FunctionCompiler`] during an explicitly unsafe decode.
#[derive(Clone)]
pub struct Function {
    source: String,
    native: Option<NativeFn>,
}

impl Function {
    /// A function known only by its source; calling it fails
    pub fn opaque(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            native: None,
        }
    }

    /// A function backed by a host callable
    pub fn native<F>(source: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            source: source.into(),
            native: Some(Arc::new(f)),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_callable(&self) -> bool {
        self.native.is_some()
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match &self.native {
            Some(f) => f(args),
            None => Err(Error::NotCallable(self.source.clone())),
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("source", &self.source)
            .field("callable", &self.is_callable())
            .finish()
    }
}

/// Host object with a class-instance shape
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub type_name: String,
    /// Own enumerable fields, in order
    pub fields: Record,
}

impl Instance {
    pub fn new(type_name: impl Into<String>, fields: Record) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
        }
    }
}

macro_rules! from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` becomes `Undefined`
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Undefined)
    }
}

impl From<DateTime<Utc>> for Value {
    /// Truncates to millisecond precision, the resolution of the wire form
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(DateTime::from_timestamp_millis(date.timestamp_millis()).unwrap_or(date))
    }
}

impl From<Url> for Value {
    fn from(url: Url) -> Self {
        Value::Url(url)
    }
}

impl From<SearchParams> for Value {
    fn from(params: SearchParams) -> Self {
        Value::UrlSearchParams(params)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Value::ByteBuffer(bytes)
    }
}

impl From<RegExp> for Value {
    fn from(re: RegExp) -> Self {
        Value::RegExp(re)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<DataView> for Value {
    fn from(view: DataView) -> Self {
        Value::DataView(view)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_identity() {
        let a = Symbol::new("test");
        let b = Symbol::new("test");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.description(), Some("test"));
        assert_eq!(Symbol::anonymous().to_string(), "Symbol()");
    }

    #[test]
    fn test_regexp_flags_are_normalized() {
        let re = RegExp::new("a.c", "ig").unwrap();
        assert_eq!(re.flags(), "gi");
        assert_eq!(re.to_string(), "/a.c/gi");
        assert!(RegExp::new("a", "q").is_err());
        assert!(RegExp::new("a", "gg").is_err());
    }

    #[test]
    fn test_regexp_compiles_with_flags() {
        let re = RegExp::new("^abc$", "im").unwrap().to_regex().unwrap();
        assert!(re.is_match("x\nABC\ny"));
        let dotall = RegExp::new("a.b", "s").unwrap().to_regex().unwrap();
        assert!(dotall.is_match("a\nb"));
    }

    #[test]
    fn test_search_params_round_trip() {
        let params = SearchParams::parse("?q=test&tag=a+b&tag=c%26d");
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("q"), Some("test"));
        assert_eq!(params.get("tag"), Some("a b"));
        assert_eq!(params.to_string(), "q=test&tag=a+b&tag=c%26d");
    }

    #[test]
    fn test_data_view_bounds() {
        let view = DataView::new(vec![1, 2, 3, 4], 1, 2).unwrap();
        assert_eq!(view.bytes(), &[2, 3]);
        assert!(DataView::new(vec![1, 2], 1, 2).is_err());
        assert!(DataView::new(vec![1, 2], usize::MAX, 2).is_err());
    }

    #[test]
    fn test_map_and_set_deduplicate() {
        let map = Value::map([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(
            map,
            Value::Map(vec![
                (Value::from("a"), Value::from(3)),
                (Value::from("b"), Value::from(2)),
            ])
        );
        let set = Value::set([1, 2, 1, 3]);
        assert_eq!(
            set,
            Value::Set(vec![Value::from(1), Value::from(2), Value::from(3)])
        );
    }

    #[test]
    fn test_builders_use_same_value_zero() {
        let numbers = [f64::NAN, f64::NAN, -0.0, 0.0];
        match Value::set(numbers) {
            Value::Set(members) => {
                assert_eq!(members.len(), 2);
                assert!(members[0].is_nan());
                assert_eq!(members[1].as_f64().map(f64::is_sign_negative), Some(true));
            }
            other => panic!("unexpected: {:?}", other),
        }

        let symbol = Symbol::new("s");
        let set = Value::set([
            Value::from(symbol.clone()),
            Value::from(symbol),
            Value::from(Symbol::new("s")),
        ]);
        match set {
            Value::Set(members) => assert_eq!(members.len(), 2),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_builders_keep_equal_containers() {
        let set = Value::set([Value::array([1]), Value::array([1])]);
        assert_eq!(set, Value::Set(vec![Value::array([1]), Value::array([1])]));

        let map = Value::map([
            (Value::record([("a", 1)]), Value::from("first")),
            (Value::record([("a", 1)]), Value::from("second")),
        ]);
        match map {
            Value::Map(entries) => assert_eq!(entries.len(), 2),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_large_set_builds_in_linear_time() {
        let set = Value::set((0..100_000).map(|n| Value::from(n % 50_000)));
        match set {
            Value::Set(members) => assert_eq!(members.len(), 50_000),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_function_call() {
        let double = Function::native("x => x * 2", |args| {
            let n = args.first().and_then(Value::as_f64).unwrap_or(0.0);
            Ok(Value::Number(n * 2.0))
        });
        assert_eq!(double.call(&[Value::from(21)]).unwrap(), Value::from(42));
        assert!(Function::opaque("() => {}").call(&[]).is_err());
    }

    #[test]
    fn test_option_and_date_conversions() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
        let precise = DateTime::from_timestamp(1_600_000_000, 123_456_789).unwrap();
        match Value::from(precise) {
            Value::Date(d) => assert_eq!(d.timestamp_millis(), 1_600_000_000_123),
            other => panic!("expected date, got {:?}", other),
        }
    }

    #[test]
    fn test_describe() {
        let instance = Instance::new("Socket", Record::new());
        assert_eq!(Value::from(instance).describe(), "instance of Socket");
        assert_eq!(Value::function("f").describe(), "Function");
        assert_eq!(Value::from(1).describe(), "Number");
    }
}

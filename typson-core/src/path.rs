//! Access paths for error reporting
//!
//! The encoder and decoder push a segment before visiting a child and pop it
//! afterwards; the path is only rendered when an error is raised.
//!
//! Rendering starts at `$`:
//!
//! | Segment | Rendered |
//! |---------|----------|
//! | record field `b` | `.b` |
//! | record field `a b` | `["a b"]` |
//! | array element / set member 2 | `[2]` |
//! | map value under key `"k"` | `{"k"}` |
//! | map value under a non-scalar key | `{#1}` (entry index) |
//! | map key of entry 1 | `{key#1}` |
//! | DataView/RegExp payload field | `.byteOffset` |

use crate::value::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Field(String),
    Index(usize),
    MapValue { label: Option<String>, index: usize },
    MapKey(usize),
}

/// Path from the root to the node being visited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn quote(key: &str) -> String {
    serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key))
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Field(key) if is_identifier(key) => write!(f, ".{}", key)?,
                Segment::Field(key) => write!(f, "[{}]", quote(key))?,
                Segment::Index(i) => write!(f, "[{}]", i)?,
                Segment::MapValue {
                    label: Some(label), ..
                } => write!(f, "{{{}}}", label)?,
                Segment::MapValue { label: None, index } => write!(f, "{{#{}}}", index)?,
                Segment::MapKey(i) => write!(f, "{{key#{}}}", i)?,
            }
        }
        Ok(())
    }
}

/// Label for a map value segment, for JSON-native scalar keys
pub(crate) fn key_label(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(quote(s)),
        Value::Number(n) if n.is_finite() => Some(n.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested_path() {
        let mut path = Path::new();
        path.push(Segment::Field("b".into()));
        path.push(Segment::Index(2));
        path.push(Segment::Field("c".into()));
        assert_eq!(path.to_string(), "$.b[2].c");
        path.pop();
        path.push(Segment::Field("not an ident".into()));
        assert_eq!(path.to_string(), "$.b[2][\"not an ident\"]");
    }

    #[test]
    fn test_render_map_segments() {
        let mut path = Path::new();
        path.push(Segment::Field("m".into()));
        path.push(Segment::MapValue {
            label: Some("\"k\"".into()),
            index: 0,
        });
        assert_eq!(path.to_string(), "$.m{\"k\"}");
        path.pop();
        path.push(Segment::MapValue {
            label: None,
            index: 3,
        });
        assert_eq!(path.to_string(), "$.m{#3}");
        path.pop();
        path.push(Segment::MapKey(1));
        assert_eq!(path.to_string(), "$.m{key#1}");
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(key_label(&Value::from("k")), Some("\"k\"".to_string()));
        assert_eq!(key_label(&Value::from(1)), Some("1".to_string()));
        assert_eq!(key_label(&Value::from(1.5)), Some("1.5".to_string()));
        assert_eq!(key_label(&Value::array([1])), None);
    }

    #[test]
    fn test_root() {
        assert_eq!(Path::new().to_string(), "$");
        assert_eq!(Path::new().depth(), 0);
    }
}

//! Serializable value model and its Elm literal renderer.
//!
//! The converter never writes Elm text by hand: geometry and objects are
//! first turned into a [`Value`] tree which is then rendered in one go.
//! Spacing of every literal is part of the output contract since the
//! generated module is committed and diffed.

use indexmap::IndexMap;

use crate::error::{ConvertError, Result};

/// Field name → value, kept in insertion order.
pub type Fields = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `"text"`, `42`, `1.500000`, `True`.
    Scalar(Scalar),
    /// `[ a, b ]`.
    Sequence(Vec<Value>),
    /// `( a, b )`.
    Tuple(Vec<Value>),
    /// `{ a = 1, b = 2}`.
    Record(Fields),
    /// `Tag arg1 arg2`. Arguments are not parenthesised; pass a
    /// [`Value::Verbatim`] when an argument needs it.
    Constructor { tag: String, args: Vec<Value> },
    /// `vec2 x y`, both components truncated towards zero.
    Vec2(f64, f64),
    /// Emitted as-is.
    Verbatim(String),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Str(s.into()))
    }

    pub fn int(i: i64) -> Self {
        Value::Scalar(Scalar::Int(i))
    }

    pub fn float(f: f64) -> Self {
        Value::Scalar(Scalar::Float(f))
    }

    pub fn bool(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }

    pub fn verbatim(s: impl Into<String>) -> Self {
        Value::Verbatim(s.into())
    }

    pub fn ctor(tag: impl Into<String>, args: Vec<Value>) -> Self {
        Value::Constructor {
            tag: tag.into(),
            args,
        }
    }

    /// Build a record from `(field, value)` pairs, in the given order.
    pub fn record<'a>(fields: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        Value::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// Render as Elm literal syntax.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Value::Scalar(scalar) => render_scalar(scalar, out),
            Value::Sequence(items) => {
                out.push_str("[ ");
                render_joined(items, ", ", out);
                out.push_str(" ]");
            }
            Value::Tuple(items) => {
                out.push_str("( ");
                render_joined(items, ", ", out);
                out.push_str(" )");
            }
            Value::Record(fields) => {
                out.push_str("{ ");
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(key);
                    out.push_str(" = ");
                    value.render_into(out);
                }
                out.push('}');
            }
            Value::Constructor { tag, args } => {
                out.push_str(tag);
                for arg in args {
                    out.push(' ');
                    arg.render_into(out);
                }
            }
            Value::Vec2(x, y) => {
                out.push_str(&format!("vec2 {} {}", x.trunc() as i64, y.trunc() as i64));
            }
            Value::Verbatim(text) => out.push_str(text),
        }
    }
}

fn render_scalar(scalar: &Scalar, out: &mut String) {
    match scalar {
        // no escaping: names coming from the editor are plain identifiers
        Scalar::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Scalar::Int(i) => out.push_str(&i.to_string()),
        Scalar::Float(f) => out.push_str(&format!("{f:.6}")),
        Scalar::Bool(true) => out.push_str("True"),
        Scalar::Bool(false) => out.push_str("False"),
    }
}

fn render_joined(items: &[Value], sep: &str, out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        item.render_into(out);
    }
}

/// Free-form JSON (custom property values) into the value model.
///
/// `null` has no Elm literal and is rejected wherever it appears.
impl TryFrom<&serde_json::Value> for Value {
    type Error = ConvertError;

    fn try_from(json: &serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;

        Ok(match json {
            Json::Null => return Err(ConvertError::UnsupportedVariant { found: "null" }),
            Json::Bool(b) => Value::bool(*b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::int(i),
                None => Value::float(
                    n.as_f64()
                        .ok_or(ConvertError::UnsupportedVariant { found: "number" })?,
                ),
            },
            Json::String(s) => Value::str(s.as_str()),
            Json::Array(items) => Value::Sequence(
                items
                    .iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Json::Object(map) => Value::Record(
                map.iter()
                    .map(|(k, v)| Value::try_from(v).map(|v| (k.clone(), v)))
                    .collect::<Result<Fields>>()?,
            ),
        })
    }
}

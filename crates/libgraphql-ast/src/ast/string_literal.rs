use crate::ast::NodeKind;
use crate::schema::AstNode;
use crate::schema::BoundFields;
use crate::schema::CONTEXT_FIELD;
use crate::schema::FieldDescriptor;
use crate::schema::FieldType;
use crate::schema::NodeContext;
use crate::schema::NodeSchema;
use crate::schema::Result;
use crate::NativeValue;
use crate::ToNativeValue;
use inherent::inherent;
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

/// A GraphQL string literal, holding the string after escape resolution.
///
/// See
/// [String Value](https://spec.graphql.org/September2025/#sec-String-Value).
#[derive(Clone, Debug, PartialEq)]
pub struct StringLiteral {
    pub context: NodeContext,
    pub value: String,
}

static STRING_LITERAL_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("value", FieldType::String),
];

static STRING_LITERAL_SCHEMA: NodeSchema =
    NodeSchema::new("StringLiteral", &STRING_LITERAL_FIELDS);

// An escape that Rust's quoting doubled: `\\b` or `\\f`.
static DOUBLED_CONTROL_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\\([bf])").unwrap());

// A doubled fixed-width unicode escape: `\\uXXXX`.
static DOUBLED_UNICODE_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\\(u[0-9a-fA-F]{4})").unwrap());

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            context: NodeContext::none(),
            value: value.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::StringLiteral
    }

    /// Render this literal as double-quoted GraphQL source text.
    ///
    /// Backspace and form feed become `\b` and `\f`, `/` is always written
    /// as `\/`, and control characters use `\uXXXX` escapes. A backslash in
    /// the value that is immediately followed by `b`, `f` or `uXXXX` is
    /// emitted as that single escape rather than as an escaped backslash.
    pub fn to_source_text(&self) -> String {
        let value = self
            .value
            .replace('\u{0008}', "\\b")
            .replace('\u{000C}', "\\f");

        let quoted = format!("{value:?}");
        debug_assert!(quoted.starts_with('"') && quoted.ends_with('"'));

        let quoted = DOUBLED_CONTROL_ESCAPE.replace_all(&quoted, r"\${1}");
        let quoted = DOUBLED_UNICODE_ESCAPE.replace_all(&quoted, r"\${1}");
        let quoted = rewrite_rust_only_escapes(&quoted);

        quoted.replace('/', r"\/")
    }
}

/// Rewrite the escapes that Rust's `Debug` quoting emits but GraphQL string
/// literals do not accept: `\0` and the braced `\u{..}` form for code points
/// inside the Basic Multilingual Plane.
///
/// Code points above U+FFFF keep the braced form, which the
/// [September 2025](https://spec.graphql.org/September2025/#EscapedUnicode)
/// grammar accepts.
fn rewrite_rust_only_escapes(quoted: &str) -> String {
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push_str("\\u0000"),
            Some('u') if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String =
                    chars.by_ref().take_while(|c| *c != '}').collect();
                match u32::from_str_radix(&hex, 16) {
                    Ok(code_point) if code_point <= 0xFFFF => {
                        let _ = write!(out, "\\u{code_point:04X}");
                    },
                    _ => {
                        let _ = write!(out, "\\u{{{hex}}}");
                    },
                }
            },
            Some(escaped) => {
                out.push('\\');
                out.push(escaped);
            },
            None => out.push('\\'),
        }
    }
    out
}

#[inherent]
impl AstNode for StringLiteral {
    pub fn schema() -> &'static NodeSchema {
        &STRING_LITERAL_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            value: fields.take_required("value")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        format!(" value={:?}", self.value)
    }
}

#[inherent]
impl ToNativeValue for StringLiteral {
    pub fn to_native_value(&self) -> NativeValue {
        NativeValue::String(self.value.clone())
    }
}

use crate::ast::Node;
use crate::ast::OperationType;
use crate::schema::NodeContext;
use crate::GraphQLSourceSpan;

/// A dynamically-shaped value supplied to keyword-style node construction.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue {
    /// Explicitly absent. Treated the same as omitting the field.
    #[default]
    Null,
    Boolean(bool),
    Context(NodeContext),
    Float(f64),
    Int(i64),
    List(Vec<FieldValue>),
    Node(Node),
    String(String),
}

impl FieldValue {
    /// Short description of this value's shape, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Boolean(_) => "a boolean",
            FieldValue::Context(_) => "a source context",
            FieldValue::Float(_) => "a float",
            FieldValue::Int(_) => "an integer",
            FieldValue::List(_) => "a list",
            FieldValue::Node(node) => node.kind().type_name(),
            FieldValue::String(_) => "a string",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<OperationType> for FieldValue {
    fn from(value: OperationType) -> Self {
        FieldValue::String(value.as_str().to_string())
    }
}

impl From<GraphQLSourceSpan> for FieldValue {
    fn from(span: GraphQLSourceSpan) -> Self {
        FieldValue::Context(NodeContext::new(span))
    }
}

impl From<NodeContext> for FieldValue {
    fn from(context: NodeContext) -> Self {
        FieldValue::Context(context)
    }
}

impl From<Node> for FieldValue {
    fn from(node: Node) -> Self {
        FieldValue::Node(node)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Typed extraction out of a [`FieldValue`].
///
/// Returns `None` when the value has a different shape.
pub trait FromFieldValue: Sized {
    fn from_field_value(value: FieldValue) -> Option<Self>;
}

impl FromFieldValue for bool {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Boolean(value) => Some(value),
            _ => None,
        }
    }
}

impl FromFieldValue for i64 {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(value) => Some(value),
            _ => None,
        }
    }
}

impl FromFieldValue for f64 {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(value) => Some(value),
            _ => None,
        }
    }
}

impl FromFieldValue for String {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl FromFieldValue for OperationType {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::String(keyword) => OperationType::from_keyword(&keyword),
            _ => None,
        }
    }
}

impl FromFieldValue for NodeContext {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Context(context) => Some(context),
            _ => None,
        }
    }
}

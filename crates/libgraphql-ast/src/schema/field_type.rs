use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::schema::FieldValue;
use std::fmt;

/// The type tag of a declared field, checked against supplied
/// [`FieldValue`]s at construction time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldType {
    Boolean,
    Context,
    Float,
    Int,
    List(&'static FieldType),
    Node(NodeClass),
    /// A string naming one of the [`OperationType`] keywords.
    OperationType,
    String,
}

impl FieldType {
    /// Whether `value` has the shape this type describes.
    ///
    /// [`FieldValue::Null`] is never accepted here; absence is handled by
    /// the field's required/default policy instead.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (FieldType::Boolean, FieldValue::Boolean(_))
            | (FieldType::Context, FieldValue::Context(_))
            | (FieldType::Float, FieldValue::Float(_))
            | (FieldType::Int, FieldValue::Int(_))
            | (FieldType::String, FieldValue::String(_)) => true,

            (FieldType::OperationType, FieldValue::String(keyword)) =>
                OperationType::from_keyword(keyword).is_some(),

            (FieldType::List(item_type), FieldValue::List(items)) =>
                items.iter().all(|item| item_type.accepts(item)),

            (FieldType::Node(class), FieldValue::Node(node)) =>
                class.admits(node.kind()),

            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Boolean => write!(f, "a boolean"),
            FieldType::Context => write!(f, "a source context"),
            FieldType::Float => write!(f, "a float"),
            FieldType::Int => write!(f, "an integer"),
            FieldType::List(item_type) =>
                write!(f, "a list where each item is {item_type}"),
            FieldType::Node(class) => write!(f, "{class}"),
            FieldType::OperationType => write!(
                f,
                "one of `query`, `mutation` or `subscription`",
            ),
            FieldType::String => write!(f, "a string"),
        }
    }
}

/// The set of node kinds a node-typed field admits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeClass {
    Definition,
    Exactly(NodeKind),
    Literal,
    Selection,
    /// A literal or a variable: anything that may appear as an argument
    /// value.
    Value,
}

impl NodeClass {
    pub fn admits(self, kind: NodeKind) -> bool {
        match self {
            NodeClass::Definition => kind.is_definition(),
            NodeClass::Exactly(expected) => kind == expected,
            NodeClass::Literal => kind.is_literal(),
            NodeClass::Selection => kind.is_selection(),
            NodeClass::Value =>
                kind.is_literal() || kind == NodeKind::Variable,
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeClass::Definition => write!(f, "a definition node"),
            NodeClass::Exactly(kind) =>
                write!(f, "a `{}` node", kind.type_name()),
            NodeClass::Literal => write!(f, "a literal node"),
            NodeClass::Selection => write!(f, "a selection node"),
            NodeClass::Value => write!(f, "a literal or variable node"),
        }
    }
}

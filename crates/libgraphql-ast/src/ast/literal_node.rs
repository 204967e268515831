use crate::ast::BooleanLiteral;
use crate::ast::EnumLiteral;
use crate::ast::FloatLiteral;
use crate::ast::IntegerLiteral;
use crate::ast::ListLiteral;
use crate::ast::NodeKind;
use crate::ast::ObjectField;
use crate::ast::ObjectLiteral;
use crate::ast::StringLiteral;
use crate::schema::AstNode;
use crate::schema::FieldType;
use crate::schema::NodeBuildError;
use crate::schema::NodeClass;
use crate::schema::NodeContext;
use crate::schema::Result;
use crate::NativeValue;
use crate::ToNativeValue;
use inherent::inherent;

/// A constant value written directly in query source text.
///
/// See the
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values) section.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralNode {
    Boolean(BooleanLiteral),
    Enum(EnumLiteral),
    Float(FloatLiteral),
    Integer(IntegerLiteral),
    List(ListLiteral),
    Object(ObjectLiteral),
    String(StringLiteral),
}

impl LiteralNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            LiteralNode::Boolean(_) => NodeKind::BooleanLiteral,
            LiteralNode::Enum(_) => NodeKind::EnumLiteral,
            LiteralNode::Float(_) => NodeKind::FloatLiteral,
            LiteralNode::Integer(_) => NodeKind::IntegerLiteral,
            LiteralNode::List(_) => NodeKind::ListLiteral,
            LiteralNode::Object(_) => NodeKind::ObjectLiteral,
            LiteralNode::String(_) => NodeKind::StringLiteral,
        }
    }

    pub fn context(&self) -> &NodeContext {
        match self {
            LiteralNode::Boolean(lit) => lit.context(),
            LiteralNode::Enum(lit) => lit.context(),
            LiteralNode::Float(lit) => lit.context(),
            LiteralNode::Integer(lit) => lit.context(),
            LiteralNode::List(lit) => lit.context(),
            LiteralNode::Object(lit) => lit.context(),
            LiteralNode::String(lit) => lit.context(),
        }
    }

    pub fn repr(&self) -> String {
        match self {
            LiteralNode::Boolean(lit) => lit.repr(),
            LiteralNode::Enum(lit) => lit.repr(),
            LiteralNode::Float(lit) => lit.repr(),
            LiteralNode::Integer(lit) => lit.repr(),
            LiteralNode::List(lit) => lit.repr(),
            LiteralNode::Object(lit) => lit.repr(),
            LiteralNode::String(lit) => lit.repr(),
        }
    }

    /// Build a literal tree holding `value`. The new nodes carry no source
    /// context.
    ///
    /// [`NativeValue::Null`] has no literal form and is rejected.
    pub fn from_native_value(value: &NativeValue) -> Result<Self> {
        Ok(match value {
            NativeValue::Null => {
                return Err(NodeBuildError::FieldTypeMismatch {
                    type_name: "LiteralNode",
                    field_name: "value",
                    expected: FieldType::Node(NodeClass::Literal),
                    found: "null",
                });
            },
            NativeValue::Boolean(value) =>
                BooleanLiteral::new(*value).into(),
            NativeValue::Int(value) =>
                IntegerLiteral::new(*value).into(),
            NativeValue::Float(value) =>
                FloatLiteral::new(*value).into(),
            NativeValue::String(value) =>
                StringLiteral::new(value.as_str()).into(),
            NativeValue::Enum(value) =>
                EnumLiteral::new(value.as_str()).into(),
            NativeValue::List(items) =>
                ListLiteral::new(
                    items
                        .iter()
                        .map(LiteralNode::from_native_value)
                        .collect::<Result<_>>()?,
                ).into(),
            NativeValue::Object(entries) =>
                ObjectLiteral::new(
                    entries
                        .iter()
                        .map(|(name, value)| {
                            Ok(ObjectField::new(
                                name.as_str(),
                                LiteralNode::from_native_value(value)?,
                            ))
                        })
                        .collect::<Result<_>>()?,
                ).into(),
        })
    }

    pub fn as_string(&self) -> Option<&StringLiteral> {
        if let LiteralNode::String(lit) = self {
            Some(lit)
        } else {
            None
        }
    }
}

#[inherent]
impl ToNativeValue for LiteralNode {
    pub fn to_native_value(&self) -> NativeValue {
        match self {
            LiteralNode::Boolean(lit) => lit.to_native_value(),
            LiteralNode::Enum(lit) => lit.to_native_value(),
            LiteralNode::Float(lit) => lit.to_native_value(),
            LiteralNode::Integer(lit) => lit.to_native_value(),
            LiteralNode::List(lit) => lit.to_native_value(),
            LiteralNode::Object(lit) => lit.to_native_value(),
            LiteralNode::String(lit) => lit.to_native_value(),
        }
    }
}

impl From<BooleanLiteral> for LiteralNode {
    fn from(lit: BooleanLiteral) -> Self {
        LiteralNode::Boolean(lit)
    }
}

impl From<EnumLiteral> for LiteralNode {
    fn from(lit: EnumLiteral) -> Self {
        LiteralNode::Enum(lit)
    }
}

impl From<FloatLiteral> for LiteralNode {
    fn from(lit: FloatLiteral) -> Self {
        LiteralNode::Float(lit)
    }
}

impl From<IntegerLiteral> for LiteralNode {
    fn from(lit: IntegerLiteral) -> Self {
        LiteralNode::Integer(lit)
    }
}

impl From<ListLiteral> for LiteralNode {
    fn from(lit: ListLiteral) -> Self {
        LiteralNode::List(lit)
    }
}

impl From<ObjectLiteral> for LiteralNode {
    fn from(lit: ObjectLiteral) -> Self {
        LiteralNode::Object(lit)
    }
}

impl From<StringLiteral> for LiteralNode {
    fn from(lit: StringLiteral) -> Self {
        LiteralNode::String(lit)
    }
}

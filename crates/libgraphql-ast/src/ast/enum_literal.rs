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

/// A GraphQL enum literal: a bare name such as `ASC`.
///
/// See
/// [Enum Value](https://spec.graphql.org/September2025/#sec-Enum-Value).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumLiteral {
    pub context: NodeContext,
    pub value: String,
}

static ENUM_LITERAL_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("value", FieldType::String),
];

static ENUM_LITERAL_SCHEMA: NodeSchema =
    NodeSchema::new("EnumLiteral", &ENUM_LITERAL_FIELDS);

impl EnumLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            context: NodeContext::none(),
            value: value.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumLiteral
    }
}

#[inherent]
impl AstNode for EnumLiteral {
    pub fn schema() -> &'static NodeSchema {
        &ENUM_LITERAL_SCHEMA
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
        format!(" value={}", self.value)
    }
}

#[inherent]
impl ToNativeValue for EnumLiteral {
    pub fn to_native_value(&self) -> NativeValue {
        NativeValue::Enum(self.value.clone())
    }
}

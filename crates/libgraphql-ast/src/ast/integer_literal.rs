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

/// A GraphQL integer literal (e.g. `42`).
///
/// See
/// [Int Value](https://spec.graphql.org/September2025/#sec-Int-Value).
#[derive(Clone, Debug, PartialEq)]
pub struct IntegerLiteral {
    pub context: NodeContext,
    pub value: i64,
}

static INTEGER_LITERAL_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("value", FieldType::Int),
];

static INTEGER_LITERAL_SCHEMA: NodeSchema =
    NodeSchema::new("IntegerLiteral", &INTEGER_LITERAL_FIELDS);

impl IntegerLiteral {
    pub fn new(value: i64) -> Self {
        Self {
            context: NodeContext::none(),
            value,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::IntegerLiteral
    }
}

#[inherent]
impl AstNode for IntegerLiteral {
    pub fn schema() -> &'static NodeSchema {
        &INTEGER_LITERAL_SCHEMA
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
impl ToNativeValue for IntegerLiteral {
    pub fn to_native_value(&self) -> NativeValue {
        NativeValue::Int(self.value)
    }
}

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

/// A GraphQL boolean literal (`true` or `false`).
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanLiteral {
    pub context: NodeContext,
    pub value: bool,
}

static BOOLEAN_LITERAL_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("value", FieldType::Boolean),
];

static BOOLEAN_LITERAL_SCHEMA: NodeSchema =
    NodeSchema::new("BooleanLiteral", &BOOLEAN_LITERAL_FIELDS);

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self {
            context: NodeContext::none(),
            value,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::BooleanLiteral
    }
}

#[inherent]
impl AstNode for BooleanLiteral {
    pub fn schema() -> &'static NodeSchema {
        &BOOLEAN_LITERAL_SCHEMA
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
impl ToNativeValue for BooleanLiteral {
    pub fn to_native_value(&self) -> NativeValue {
        NativeValue::Boolean(self.value)
    }
}

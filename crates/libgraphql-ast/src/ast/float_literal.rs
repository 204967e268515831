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

/// A GraphQL float literal (e.g. `1.5e3`).
#[derive(Clone, Debug, PartialEq)]
pub struct FloatLiteral {
    pub context: NodeContext,
    pub value: f64,
}

static FLOAT_LITERAL_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("value", FieldType::Float),
];

static FLOAT_LITERAL_SCHEMA: NodeSchema =
    NodeSchema::new("FloatLiteral", &FLOAT_LITERAL_FIELDS);

impl FloatLiteral {
    pub fn new(value: f64) -> Self {
        Self {
            context: NodeContext::none(),
            value,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::FloatLiteral
    }
}

#[inherent]
impl AstNode for FloatLiteral {
    pub fn schema() -> &'static NodeSchema {
        &FLOAT_LITERAL_SCHEMA
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
impl ToNativeValue for FloatLiteral {
    pub fn to_native_value(&self) -> NativeValue {
        NativeValue::Float(self.value)
    }
}

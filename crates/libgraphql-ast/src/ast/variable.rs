use crate::schema::AstNode;
use crate::schema::BoundFields;
use crate::schema::CONTEXT_FIELD;
use crate::schema::FieldDescriptor;
use crate::schema::FieldType;
use crate::schema::NodeContext;
use crate::schema::NodeSchema;
use crate::schema::Result;
use inherent::inherent;

/// A reference to an operation variable (e.g. `$id`). `value` holds the
/// variable's name without the leading `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub context: NodeContext,
    pub value: String,
}

static VARIABLE_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("value", FieldType::String),
];

static VARIABLE_SCHEMA: NodeSchema =
    NodeSchema::new("Variable", &VARIABLE_FIELDS);

impl Variable {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            context: NodeContext::none(),
            value: value.into(),
        }
    }
}

#[inherent]
impl AstNode for Variable {
    pub fn schema() -> &'static NodeSchema {
        &VARIABLE_SCHEMA
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
        format!(" ${}", self.value)
    }
}

use crate::ast::Value;
use crate::schema::AstNode;
use crate::schema::BoundFields;
use crate::schema::CONTEXT_FIELD;
use crate::schema::FieldDescriptor;
use crate::schema::FieldType;
use crate::schema::NodeClass;
use crate::schema::NodeContext;
use crate::schema::NodeSchema;
use crate::schema::Result;
use inherent::inherent;

/// A single `name: value` argument passed to a field or directive.
///
/// See
/// [Arguments](https://spec.graphql.org/September2025/#sec-Language.Arguments).
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub context: NodeContext,
    pub name: String,
    pub value: Value,
}

static ARGUMENT_FIELDS: [FieldDescriptor; 3] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("name", FieldType::String),
    FieldDescriptor::required("value", FieldType::Node(NodeClass::Value)),
];

static ARGUMENT_SCHEMA: NodeSchema =
    NodeSchema::new("Argument", &ARGUMENT_FIELDS);

impl Argument {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            context: NodeContext::none(),
            name: name.into(),
            value: value.into(),
        }
    }
}

#[inherent]
impl AstNode for Argument {
    pub fn schema() -> &'static NodeSchema {
        &ARGUMENT_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            name: fields.take_required("name")?,
            value: fields.take_required("value")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        format!(" name={}", self.name)
    }
}

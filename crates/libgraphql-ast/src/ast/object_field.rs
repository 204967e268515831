use crate::ast::LiteralNode;
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

/// A single `name: value` entry within an [`ObjectLiteral`](crate::ast::ObjectLiteral).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub context: NodeContext,
    pub name: String,
    pub value: LiteralNode,
}

static OBJECT_FIELD_FIELDS: [FieldDescriptor; 3] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("name", FieldType::String),
    FieldDescriptor::required("value", FieldType::Node(NodeClass::Literal)),
];

static OBJECT_FIELD_SCHEMA: NodeSchema =
    NodeSchema::new("ObjectField", &OBJECT_FIELD_FIELDS);

impl ObjectField {
    pub fn new(name: impl Into<String>, value: impl Into<LiteralNode>) -> Self {
        Self {
            context: NodeContext::none(),
            name: name.into(),
            value: value.into(),
        }
    }
}

#[inherent]
impl AstNode for ObjectField {
    pub fn schema() -> &'static NodeSchema {
        &OBJECT_FIELD_SCHEMA
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

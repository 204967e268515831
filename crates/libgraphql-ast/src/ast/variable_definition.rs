use crate::ast::LiteralNode;
use crate::ast::NodeKind;
use crate::ast::VariableType;
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

/// A variable definition within an operation's variable list (e.g.
/// `$id: ID! = "default"`).
///
/// `var_type` is declared as the `type` field; `value` is the optional
/// default.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub context: NodeContext,
    pub name: String,
    pub var_type: VariableType,
    pub value: Option<LiteralNode>,
}

static VARIABLE_DEFINITION_FIELDS: [FieldDescriptor; 4] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("name", FieldType::String),
    FieldDescriptor::required(
        "type",
        FieldType::Node(NodeClass::Exactly(NodeKind::VariableType)),
    ),
    FieldDescriptor::optional("value", FieldType::Node(NodeClass::Literal)),
];

static VARIABLE_DEFINITION_SCHEMA: NodeSchema =
    NodeSchema::new("VariableDefinition", &VARIABLE_DEFINITION_FIELDS);

impl VariableDefinition {
    pub fn new(name: impl Into<String>, var_type: VariableType) -> Self {
        Self {
            context: NodeContext::none(),
            name: name.into(),
            var_type,
            value: None,
        }
    }
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn schema() -> &'static NodeSchema {
        &VARIABLE_DEFINITION_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            name: fields.take_required("name")?,
            var_type: fields.take_required("type")?,
            value: fields.take_optional("value")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        format!(" ${}", self.name)
    }
}

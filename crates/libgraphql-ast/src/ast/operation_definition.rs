use crate::ast::Directive;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::ast::definition::DEFINITION_NAME_FIELD;
use crate::ast::definition::DEFINITION_SELECTION_SET_FIELD;
use crate::ast::directive::DIRECTIVE_LIST;
use crate::schema::AstNode;
use crate::schema::BoundFields;
use crate::schema::CONTEXT_FIELD;
use crate::schema::FieldDescriptor;
use crate::schema::FieldType;
use crate::schema::NodeClass;
use crate::schema::NodeContext;
use crate::schema::NodeSchema;
use crate::schema::Result;
use crate::schema::empty_list;
use inherent::inherent;

/// A query, mutation, or subscription.
///
/// `operation_type` is declared as the `type` field. It is `None` for the
/// query shorthand (a bare `{ ... }` selection set).
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations).
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub context: NodeContext,
    pub name: Option<String>,
    pub selection_set: SelectionSet,
    pub operation_type: Option<OperationType>,
    pub variables: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
}

static OPERATION_DEFINITION_FIELDS: [FieldDescriptor; 6] = [
    CONTEXT_FIELD,
    DEFINITION_NAME_FIELD,
    DEFINITION_SELECTION_SET_FIELD,
    FieldDescriptor::optional("type", FieldType::OperationType),
    FieldDescriptor::defaulted(
        "variables",
        FieldType::List(
            &FieldType::Node(NodeClass::Exactly(NodeKind::VariableDefinition)),
        ),
        empty_list,
    ),
    FieldDescriptor::defaulted("directives", DIRECTIVE_LIST, empty_list),
];

static OPERATION_DEFINITION_SCHEMA: NodeSchema =
    NodeSchema::new("OperationDefinition", &OPERATION_DEFINITION_FIELDS);

impl OperationDefinition {
    pub fn new(
        operation_type: Option<OperationType>,
        selection_set: SelectionSet,
    ) -> Self {
        Self {
            context: NodeContext::none(),
            name: None,
            selection_set,
            operation_type,
            variables: vec![],
            directives: vec![],
        }
    }

    /// The operation type, treating the shorthand form as a query.
    pub fn effective_operation_type(&self) -> OperationType {
        self.operation_type.unwrap_or(OperationType::Query)
    }

    pub fn variable(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.iter().find(|var| var.name == name)
    }
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn schema() -> &'static NodeSchema {
        &OPERATION_DEFINITION_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            name: fields.take_optional("name")?,
            selection_set: fields.take_required("selection_set")?,
            operation_type: fields.take_optional("type")?,
            variables: fields.take_list("variables")?,
            directives: fields.take_list("directives")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        let op = self.effective_operation_type();
        match &self.name {
            Some(name) => format!(" {op} {name}"),
            None => format!(" {op}"),
        }
    }
}

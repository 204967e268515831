use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;
use crate::ast::directive::ARGUMENT_LIST;
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

/// A field selection within a selection set, optionally aliased, with
/// arguments, directives, and a nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub context: NodeContext,
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
}

static FIELD_FIELDS: [FieldDescriptor; 6] = [
    CONTEXT_FIELD,
    FieldDescriptor::optional("alias", FieldType::String),
    FieldDescriptor::required("name", FieldType::String),
    FieldDescriptor::defaulted("arguments", ARGUMENT_LIST, empty_list),
    FieldDescriptor::defaulted("directives", DIRECTIVE_LIST, empty_list),
    FieldDescriptor::optional(
        "selection_set",
        FieldType::Node(NodeClass::Exactly(NodeKind::SelectionSet)),
    ),
];

static FIELD_SCHEMA: NodeSchema = NodeSchema::new("Field", &FIELD_FIELDS);

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            context: NodeContext::none(),
            alias: None,
            name: name.into(),
            arguments: vec![],
            directives: vec![],
            selection_set: None,
        }
    }

    /// The key this field's result is returned under: the alias when one is
    /// present, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

#[inherent]
impl AstNode for Field {
    pub fn schema() -> &'static NodeSchema {
        &FIELD_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            alias: fields.take_optional("alias")?,
            name: fields.take_required("name")?,
            arguments: fields.take_list("arguments")?,
            directives: fields.take_list("directives")?,
            selection_set: fields.take_optional("selection_set")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        match &self.alias {
            Some(alias) => format!(" {alias}: {}", self.name),
            None => format!(" {}", self.name),
        }
    }
}

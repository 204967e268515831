use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::ast::definition::DEFINITION_NAME_FIELD;
use crate::ast::definition::DEFINITION_SELECTION_SET_FIELD;
use crate::ast::directive::DIRECTIVE_LIST;
use crate::schema::AstNode;
use crate::schema::BoundFields;
use crate::schema::CONTEXT_FIELD;
use crate::schema::FieldDescriptor;
use crate::schema::FieldType;
use crate::schema::NodeContext;
use crate::schema::NodeSchema;
use crate::schema::Result;
use crate::schema::empty_list;
use inherent::inherent;

/// A named fragment definition (e.g.
/// `fragment UserFields on User { id }`).
///
/// See
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub context: NodeContext,
    pub name: Option<String>,
    pub selection_set: SelectionSet,
    pub on: String,
    pub directives: Vec<Directive>,
}

static FRAGMENT_DEFINITION_FIELDS: [FieldDescriptor; 5] = [
    CONTEXT_FIELD,
    DEFINITION_NAME_FIELD,
    DEFINITION_SELECTION_SET_FIELD,
    FieldDescriptor::required("on", FieldType::String),
    FieldDescriptor::defaulted("directives", DIRECTIVE_LIST, empty_list),
];

static FRAGMENT_DEFINITION_SCHEMA: NodeSchema =
    NodeSchema::new("FragmentDefinition", &FRAGMENT_DEFINITION_FIELDS);

impl FragmentDefinition {
    pub fn new(
        name: impl Into<String>,
        on: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Self {
        Self {
            context: NodeContext::none(),
            name: Some(name.into()),
            selection_set,
            on: on.into(),
            directives: vec![],
        }
    }
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn schema() -> &'static NodeSchema {
        &FRAGMENT_DEFINITION_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            name: fields.take_optional("name")?,
            selection_set: fields.take_required("selection_set")?,
            on: fields.take_required("on")?,
            directives: fields.take_list("directives")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        match &self.name {
            Some(name) => format!(" {name} on {}", self.on),
            None => format!(" on {}", self.on),
        }
    }
}

use crate::ast::Directive;
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

/// A named fragment spread (e.g. `...UserFields`).
///
/// See
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub context: NodeContext,
    pub name: String,
    pub directives: Vec<Directive>,
}

static FRAGMENT_SPREAD_FIELDS: [FieldDescriptor; 3] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("name", FieldType::String),
    FieldDescriptor::defaulted("directives", DIRECTIVE_LIST, empty_list),
];

static FRAGMENT_SPREAD_SCHEMA: NodeSchema =
    NodeSchema::new("FragmentSpread", &FRAGMENT_SPREAD_FIELDS);

impl FragmentSpread {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            context: NodeContext::none(),
            name: name.into(),
            directives: vec![],
        }
    }
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn schema() -> &'static NodeSchema {
        &FRAGMENT_SPREAD_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            name: fields.take_required("name")?,
            directives: fields.take_list("directives")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        format!(" ...{}", self.name)
    }
}

use crate::ast::Argument;
use crate::ast::NodeKind;
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

/// Field type shared by every `arguments` field.
pub(crate) const ARGUMENT_LIST: FieldType =
    FieldType::List(&FieldType::Node(NodeClass::Exactly(NodeKind::Argument)));

/// Field type shared by every `directives` field.
pub(crate) const DIRECTIVE_LIST: FieldType =
    FieldType::List(&FieldType::Node(NodeClass::Exactly(NodeKind::Directive)));

/// A directive applied to a definition or selection (e.g.
/// `@include(if: $flag)`).
///
/// See
/// [Directives](https://spec.graphql.org/September2025/#sec-Language.Directives).
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub context: NodeContext,
    pub name: String,
    pub arguments: Vec<Argument>,
}

static DIRECTIVE_FIELDS: [FieldDescriptor; 3] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("name", FieldType::String),
    FieldDescriptor::defaulted("arguments", ARGUMENT_LIST, empty_list),
];

static DIRECTIVE_SCHEMA: NodeSchema =
    NodeSchema::new("Directive", &DIRECTIVE_FIELDS);

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            context: NodeContext::none(),
            name: name.into(),
            arguments: vec![],
        }
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

#[inherent]
impl AstNode for Directive {
    pub fn schema() -> &'static NodeSchema {
        &DIRECTIVE_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            name: fields.take_required("name")?,
            arguments: fields.take_list("arguments")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        format!(" name={}", self.name)
    }
}

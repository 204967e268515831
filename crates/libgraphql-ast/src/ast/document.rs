use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
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

/// Root node of a query document: an ordered list of operation and fragment
/// [`Definition`]s.
///
/// See
/// [Document](https://spec.graphql.org/September2025/#sec-Document).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub context: NodeContext,
    pub definitions: Vec<Definition>,
}

static DOCUMENT_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::defaulted(
        "definitions",
        FieldType::List(&FieldType::Node(NodeClass::Definition)),
        empty_list,
    ),
];

static DOCUMENT_SCHEMA: NodeSchema =
    NodeSchema::new("Document", &DOCUMENT_FIELDS);

impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self {
            context: NodeContext::none(),
            definitions,
        }
    }

    /// Iterate over only the operation definitions in this document.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterate over only the fragment definitions in this document.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }

    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments()
            .find(|frag| frag.name.as_deref() == Some(name))
    }
}

#[inherent]
impl AstNode for Document {
    pub fn schema() -> &'static NodeSchema {
        &DOCUMENT_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            definitions: fields.take_list("definitions")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        format!(" definitions={}", self.definitions.len())
    }
}

use crate::ast::Directive;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;
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

/// An inline fragment (e.g. `... on User { name }`). The type condition is
/// optional: `... @include(if: $x) { name }` has none.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub context: NodeContext,
    pub on: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

static INLINE_FRAGMENT_FIELDS: [FieldDescriptor; 4] = [
    CONTEXT_FIELD,
    FieldDescriptor::optional("on", FieldType::String),
    FieldDescriptor::defaulted("directives", DIRECTIVE_LIST, empty_list),
    FieldDescriptor::required(
        "selection_set",
        FieldType::Node(NodeClass::Exactly(NodeKind::SelectionSet)),
    ),
];

static INLINE_FRAGMENT_SCHEMA: NodeSchema =
    NodeSchema::new("InlineFragment", &INLINE_FRAGMENT_FIELDS);

impl InlineFragment {
    pub fn new(on: Option<String>, selection_set: SelectionSet) -> Self {
        Self {
            context: NodeContext::none(),
            on,
            directives: vec![],
            selection_set,
        }
    }
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn schema() -> &'static NodeSchema {
        &INLINE_FRAGMENT_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            on: fields.take_optional("on")?,
            directives: fields.take_list("directives")?,
            selection_set: fields.take_required("selection_set")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        self.on
            .as_ref()
            .map(|on| format!(" on {on}"))
            .unwrap_or_default()
    }
}

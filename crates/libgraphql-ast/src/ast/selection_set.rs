use crate::ast::Selection;
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

/// A braced list of selections (e.g. `{ id name }`).
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    pub context: NodeContext,
    pub selections: Vec<Selection>,
}

static SELECTION_SET_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::defaulted(
        "selections",
        FieldType::List(&FieldType::Node(NodeClass::Selection)),
        empty_list,
    ),
];

static SELECTION_SET_SCHEMA: NodeSchema =
    NodeSchema::new("SelectionSet", &SELECTION_SET_FIELDS);

impl SelectionSet {
    pub fn new(selections: Vec<Selection>) -> Self {
        Self {
            context: NodeContext::none(),
            selections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn schema() -> &'static NodeSchema {
        &SELECTION_SET_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            selections: fields.take_list("selections")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }
}

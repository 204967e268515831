use crate::ast::LiteralNode;
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
use crate::NativeValue;
use crate::ToNativeValue;
use inherent::inherent;

/// A GraphQL list literal (e.g. `[1, 2, 3]`).
///
/// See
/// [List Value](https://spec.graphql.org/September2025/#sec-List-Value).
#[derive(Clone, Debug, PartialEq)]
pub struct ListLiteral {
    pub context: NodeContext,
    pub value: Vec<LiteralNode>,
}

static LIST_LITERAL_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::required(
        "value",
        FieldType::List(&FieldType::Node(NodeClass::Literal)),
    ),
];

static LIST_LITERAL_SCHEMA: NodeSchema =
    NodeSchema::new("ListLiteral", &LIST_LITERAL_FIELDS);

impl ListLiteral {
    pub fn new(value: Vec<LiteralNode>) -> Self {
        Self {
            context: NodeContext::none(),
            value,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::ListLiteral
    }
}

#[inherent]
impl AstNode for ListLiteral {
    pub fn schema() -> &'static NodeSchema {
        &LIST_LITERAL_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            value: fields.take_list("value")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        format!(" len={}", self.value.len())
    }
}

#[inherent]
impl ToNativeValue for ListLiteral {
    pub fn to_native_value(&self) -> NativeValue {
        NativeValue::List(
            self.value
                .iter()
                .map(|item| item.to_native_value())
                .collect(),
        )
    }
}

use crate::ast::NodeKind;
use crate::ast::ObjectField;
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
use indexmap::IndexMap;
use inherent::inherent;

/// A GraphQL input object literal (e.g. `{x: 1, y: 2}`).
///
/// See
/// [Input Object Values](https://spec.graphql.org/September2025/#sec-Input-Object-Values).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectLiteral {
    pub context: NodeContext,
    pub value: Vec<ObjectField>,
}

static OBJECT_LITERAL_FIELDS: [FieldDescriptor; 2] = [
    CONTEXT_FIELD,
    FieldDescriptor::required(
        "value",
        FieldType::List(
            &FieldType::Node(NodeClass::Exactly(NodeKind::ObjectField)),
        ),
    ),
];

static OBJECT_LITERAL_SCHEMA: NodeSchema =
    NodeSchema::new("ObjectLiteral", &OBJECT_LITERAL_FIELDS);

impl ObjectLiteral {
    pub fn new(value: Vec<ObjectField>) -> Self {
        Self {
            context: NodeContext::none(),
            value,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectLiteral
    }

    /// Look up the last field named `name`.
    pub fn field(&self, name: &str) -> Option<&ObjectField> {
        self.value.iter().rev().find(|field| field.name == name)
    }
}

#[inherent]
impl AstNode for ObjectLiteral {
    pub fn schema() -> &'static NodeSchema {
        &OBJECT_LITERAL_SCHEMA
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
impl ToNativeValue for ObjectLiteral {
    /// Entries keep their source order. When a name repeats, the last value
    /// wins and the entry stays where the name first appeared.
    pub fn to_native_value(&self) -> NativeValue {
        let mut entries = IndexMap::with_capacity(self.value.len());
        for field in &self.value {
            let value = field.value.to_native_value();
            if entries.insert(field.name.clone(), value).is_some() {
                log::debug!(
                    "Object literal field `{}` appears more than once; \
                    keeping the last value.",
                    field.name,
                );
            }
        }
        NativeValue::Object(entries)
    }
}

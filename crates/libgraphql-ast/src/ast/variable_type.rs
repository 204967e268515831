use crate::schema::AstNode;
use crate::schema::BoundFields;
use crate::schema::CONTEXT_FIELD;
use crate::schema::FieldDescriptor;
use crate::schema::FieldType;
use crate::schema::FieldValue;
use crate::schema::NodeContext;
use crate::schema::NodeSchema;
use crate::schema::Result;
use inherent::inherent;
use std::fmt;

/// The declared type of a variable: a named type, optionally wrapped as a
/// list, and either nullable or non-null.
///
/// `Int` is `{ name: "Int", nullable: true, list: false }`; `[Int]!` is
/// `{ name: "Int", nullable: false, list: true }`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableType {
    pub context: NodeContext,
    pub name: String,
    pub nullable: bool,
    pub list: bool,
}

fn nullable_default() -> FieldValue {
    FieldValue::Boolean(true)
}

fn list_default() -> FieldValue {
    FieldValue::Boolean(false)
}

static VARIABLE_TYPE_FIELDS: [FieldDescriptor; 4] = [
    CONTEXT_FIELD,
    FieldDescriptor::required("name", FieldType::String),
    FieldDescriptor::defaulted("nullable", FieldType::Boolean, nullable_default),
    FieldDescriptor::defaulted("list", FieldType::Boolean, list_default),
];

static VARIABLE_TYPE_SCHEMA: NodeSchema =
    NodeSchema::new("VariableType", &VARIABLE_TYPE_FIELDS);

impl VariableType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            context: NodeContext::none(),
            name: name.into(),
            nullable: true,
            list: false,
        }
    }

    pub fn non_null(self) -> Self {
        Self {
            nullable: false,
            ..self
        }
    }

    pub fn list_of(self) -> Self {
        Self { list: true, ..self }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.list, self.nullable) {
            (false, true) => write!(f, "{}", self.name),
            (false, false) => write!(f, "{}!", self.name),
            (true, true) => write!(f, "[{}]", self.name),
            (true, false) => write!(f, "[{}]!", self.name),
        }
    }
}

#[inherent]
impl AstNode for VariableType {
    pub fn schema() -> &'static NodeSchema {
        &VARIABLE_TYPE_SCHEMA
    }

    pub fn from_bound_fields(mut fields: BoundFields) -> Result<Self> {
        Ok(Self {
            context: fields.take_context(),
            name: fields.take_required("name")?,
            nullable: fields.take_required("nullable")?,
            list: fields.take_required("list")?,
        })
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    pub fn extra_repr(&self) -> String {
        format!(" {self}")
    }
}

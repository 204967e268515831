use crate::schema::FieldType;
use crate::schema::FieldValue;

/// Namespace reported by every node's diagnostic representation.
pub const NAMESPACE: &str = "graphql";

/// Produces a fresh default value each time a node is constructed without
/// the corresponding field. Container defaults are therefore never shared
/// between two nodes.
pub type DefaultFactory = fn() -> FieldValue;

/// Default factory for list-typed fields.
pub fn empty_list() -> FieldValue {
    FieldValue::List(Vec::new())
}

/// The declaration of a single field on a node type.
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub field_type: FieldType,
    pub default: Option<DefaultFactory>,
    pub required: bool,
    /// Hidden fields are carried on the node but excluded from structural
    /// comparison and from [`NodeSchema::visible_fields`].
    pub hidden: bool,
}

impl FieldDescriptor {
    /// A field that may be omitted; it is then absent (`None`).
    pub const fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            default: None,
            required: false,
            hidden: false,
        }
    }

    /// A field that must always be supplied. Required fields never declare a
    /// default.
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            default: None,
            required: true,
            hidden: false,
        }
    }

    /// A field that falls back to `default()` when omitted.
    pub const fn defaulted(
        name: &'static str,
        field_type: FieldType,
        default: DefaultFactory,
    ) -> Self {
        Self {
            name,
            field_type,
            default: Some(default),
            required: false,
            hidden: false,
        }
    }

    pub const fn hidden(self) -> Self {
        Self {
            hidden: true,
            ..self
        }
    }
}

/// Source-position metadata. Inherited by every node type as its first
/// field.
pub const CONTEXT_FIELD: FieldDescriptor =
    FieldDescriptor::optional("context", FieldType::Context).hidden();

/// The complete field table of one concrete node type.
///
/// `fields` lists ancestor fields first and the type's own fields last, each
/// level in declaration order.
#[derive(Debug)]
pub struct NodeSchema {
    pub namespace: &'static str,
    pub type_name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl NodeSchema {
    pub const fn new(
        type_name: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            namespace: NAMESPACE,
            type_name,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Iterate the fields that take part in structural comparison.
    pub fn visible_fields(
        &self,
    ) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields.iter().filter(|field| !field.hidden)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }
}

//! The declarative field model shared by every node type.
//!
//! Each node type owns one static [`NodeSchema`]: an ordered table of
//! [`FieldDescriptor`]s listing inherited fields first (always starting with
//! the hidden [`CONTEXT_FIELD`]) followed by the type's own fields.
//! [`BoundFields::bind`] validates keyword-style input against that table and
//! node types then pull typed values out of the result.

mod ast_node;
mod bound_fields;
mod field_descriptor;
mod field_type;
mod field_value;
mod node_build_error;
mod node_context;

pub use ast_node::AstNode;
pub use bound_fields::BoundFields;
pub use field_descriptor::CONTEXT_FIELD;
pub use field_descriptor::DefaultFactory;
pub use field_descriptor::FieldDescriptor;
pub use field_descriptor::NAMESPACE;
pub use field_descriptor::NodeSchema;
pub use field_descriptor::empty_list;
pub use field_type::FieldType;
pub use field_type::NodeClass;
pub use field_value::FieldValue;
pub use field_value::FromFieldValue;
pub use node_build_error::NodeBuildError;
pub use node_context::NodeContext;

pub(crate) type Result<T> = std::result::Result<T, NodeBuildError>;

#[cfg(test)]
mod tests;

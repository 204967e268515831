//! Node types for GraphQL query documents.
//!
//! Every concrete node type is a plain struct with public fields, a
//! leading hidden `context` field, and an `#[inherent] impl AstNode` giving
//! it a static field table and keyword-style construction. Node families
//! are closed enums so consumers can match exhaustively:
//!
//! - [`LiteralNode`]: string, integer, float, boolean, enum, list and object
//!   literals
//! - [`Value`]: a literal or a [`Variable`], as accepted in argument position
//! - [`Definition`]: [`OperationDefinition`] or [`FragmentDefinition`]
//! - [`Selection`]: [`Field`], [`FragmentSpread`] or [`InlineFragment`]
//! - [`Node`]: any of the above, used when constructing by [`NodeKind`]
//!
//! Nodes form a strict tree: every child is owned by exactly one parent
//! field.

mod argument;
mod boolean_literal;
mod definition;
mod directive;
mod document;
mod enum_literal;
mod field;
mod float_literal;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod integer_literal;
mod list_literal;
mod literal_node;
mod node;
mod node_kind;
mod object_field;
mod object_literal;
mod operation_definition;
mod operation_type;
mod selection;
mod selection_set;
mod string_literal;
mod value;
mod variable;
mod variable_definition;
mod variable_type;

pub use argument::Argument;
pub use boolean_literal::BooleanLiteral;
pub use definition::Definition;
pub use directive::Directive;
pub use document::Document;
pub use enum_literal::EnumLiteral;
pub use field::Field;
pub use float_literal::FloatLiteral;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use integer_literal::IntegerLiteral;
pub use list_literal::ListLiteral;
pub use literal_node::LiteralNode;
pub use node::Node;
pub use node_kind::NodeKind;
pub use object_field::ObjectField;
pub use object_literal::ObjectLiteral;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_literal::StringLiteral;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;
pub use variable_type::VariableType;

#[cfg(test)]
mod tests;

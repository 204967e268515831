//! Syntax-tree nodes for GraphQL query documents.
//!
//! Every node type is described by a static [field-descriptor
//! table](schema::NodeSchema) that drives keyword-style construction
//! ([`AstNode::build`]), so a grammar-driven parser can create nodes from
//! `(name, value)` pairs and get uniform validation errors back. The same
//! nodes can also be built directly as plain Rust structs.
//!
//! Literal nodes additionally convert to [`NativeValue`]s
//! ([`ToNativeValue`]) and string literals re-emit themselves as
//! double-quoted GraphQL source text
//! ([`StringLiteral::to_source_text`](ast::StringLiteral::to_source_text)).
//!
//! # Example
//!
//! ```rust
//! use libgraphql_ast::AstNode;
//! use libgraphql_ast::ast::Field;
//!
//! let field = Field::build([("name", "viewer".into())]).unwrap();
//! assert_eq!(field.name, "viewer");
//! assert!(field.arguments.is_empty());
//! ```

pub mod ast;
mod graphql_source_span;
mod native_value;
pub mod schema;
mod source_position;

pub use graphql_source_span::GraphQLSourceSpan;
pub use native_value::NativeValue;
pub use native_value::ToNativeValue;
pub use schema::AstNode;
pub use schema::NodeBuildError;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;

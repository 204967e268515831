//! Shared test helpers for constructing AST nodes in unit tests.

use crate::ast::IntegerLiteral;
use crate::ast::LiteralNode;
use crate::ast::ObjectField;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

/// Helper: build a `GraphQLSourceSpan` covering `[start_byte, end_byte)` on
/// line 0.
pub fn make_span(
    start_byte: usize,
    end_byte: usize,
) -> GraphQLSourceSpan {
    GraphQLSourceSpan::new(
        SourcePosition::new(0, start_byte, Some(start_byte), start_byte),
        SourcePosition::new(0, end_byte, Some(end_byte), end_byte),
    )
}

pub fn int(value: i64) -> LiteralNode {
    IntegerLiteral::new(value).into()
}

pub fn object_field(name: &str, value: i64) -> ObjectField {
    ObjectField::new(name, int(value))
}

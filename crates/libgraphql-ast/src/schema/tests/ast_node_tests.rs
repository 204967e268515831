//! Tests for the behaviour shared by every node through [`AstNode`].

use crate::ast::Field;
use crate::ast::IntegerLiteral;
use crate::ast::NodeKind;
use crate::ast::StringLiteral;
use crate::ast::Variable;
use crate::schema::AstNode;
use crate::schema::NodeBuildError;
use crate::schema::NodeContext;
use crate::tests::ast_test_utils::make_span;

#[test]
fn build_with_context_attaches_span() {
    let var = Variable::build_with_context(
        make_span(3, 6),
        [("value", "id".into())],
    ).unwrap();
    let span = var.context().span().unwrap();
    assert_eq!(span.start_inclusive.byte_offset(), 3);
    assert_eq!(span.byte_len(), 3);
}

#[test]
fn context_is_ignored_by_equality() {
    let parsed = IntegerLiteral::build_with_context(
        make_span(10, 12),
        [("value", 42.into())],
    ).unwrap();
    let synthetic = IntegerLiteral::new(42);

    assert!(!parsed.context().is_none());
    assert!(synthetic.context().is_none());
    assert_eq!(parsed, synthetic);
    assert_ne!(parsed, IntegerLiteral::new(43));
}

#[test]
fn contexts_always_compare_equal() {
    assert_eq!(NodeContext::new(make_span(0, 1)), NodeContext::none());
    assert_eq!(
        NodeContext::from(Some(make_span(0, 1))),
        NodeContext::from(make_span(5, 9)),
    );
}

#[test]
fn context_supplied_twice_is_rejected() {
    assert_eq!(
        Variable::build_with_context(
            make_span(0, 1),
            [("context", make_span(0, 1).into()), ("value", "x".into())],
        ),
        Err(NodeBuildError::DuplicateField {
            type_name: "Variable",
            field_name: "context",
        }),
    );
}

#[test]
fn repr_names_namespace_type_and_address() {
    let field = Field::new("viewer");
    let repr = field.repr();
    assert!(repr.starts_with("<graphql.Field at 0x"), "{repr}");
    assert!(repr.ends_with(" viewer>"), "{repr}");
    assert!(repr.contains(&format!("{:p}", &field)), "{repr}");
}

#[test]
fn repr_includes_type_specific_suffix() {
    let mut field = Field::new("viewer");
    field.alias = Some("me".to_string());
    assert!(field.repr().ends_with(" me: viewer>"));

    assert!(StringLiteral::new("a").repr().ends_with(r#" value="a">"#));
    assert!(IntegerLiteral::new(7).repr().ends_with(" value=7>"));
    assert!(Variable::new("id").repr().ends_with(" $id>"));
}

#[test]
fn kind_schema_matches_type_schema() {
    assert!(std::ptr::eq(NodeKind::Field.schema(), Field::schema()));
    assert_eq!(NodeKind::StringLiteral.type_name(), "StringLiteral");
}

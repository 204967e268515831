//! Tests for [`Document`] and [`Definition`] nodes.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::schema::AstNode;
use crate::schema::FieldValue;
use crate::schema::NodeBuildError;

fn selection_set(names: &[&str]) -> SelectionSet {
    SelectionSet::new(
        names
            .iter()
            .map(|name| Selection::from(Field::new(*name)))
            .collect(),
    )
}

#[test]
fn empty_document_has_no_definitions() {
    let doc = Document::build([]).unwrap();
    assert!(doc.definitions.is_empty());
    assert_eq!(doc, Document::default());
    assert!(doc.repr().ends_with(" definitions=0>"));
}

#[test]
fn document_partitions_operations_and_fragments() {
    let op = OperationDefinition::new(
        Some(OperationType::Query),
        SelectionSet::new(vec![FragmentSpread::new("UserFields").into()]),
    );
    let frag = FragmentDefinition::new("UserFields", "User", selection_set(&["id"]));
    let doc = Document::build([(
        "definitions",
        vec![Definition::from(op.clone()), frag.clone().into()].into(),
    )]).unwrap();

    assert_eq!(doc.definitions.len(), 2);
    assert_eq!(doc.operations().collect::<Vec<_>>(), [&op]);
    assert_eq!(doc.fragments().collect::<Vec<_>>(), [&frag]);
    assert_eq!(doc.fragment("UserFields"), Some(&frag));
    assert_eq!(doc.fragment("Other"), None);
}

#[test]
fn document_rejects_non_definitions() {
    let err = Document::build([(
        "definitions",
        FieldValue::List(vec![Field::new("id").into()]),
    )]).unwrap_err();
    assert!(matches!(
        err,
        NodeBuildError::FieldTypeMismatch { field_name: "definitions", .. },
    ));
}

#[test]
fn shorthand_query_has_no_operation_type() {
    let op = OperationDefinition::build([
        ("selection_set", selection_set(&["me"]).into()),
    ]).unwrap();
    assert_eq!(op.operation_type, None);
    assert_eq!(op.effective_operation_type(), OperationType::Query);
    assert_eq!(op.name, None);
    assert!(op.variables.is_empty());
    assert!(op.directives.is_empty());
    assert!(op.repr().ends_with(" query>"));
}

#[test]
fn named_operation() {
    let op = OperationDefinition::build([
        ("name", "Viewer".into()),
        ("type", OperationType::Subscription.into()),
        ("selection_set", selection_set(&["me"]).into()),
    ]).unwrap();
    let def = Definition::from(op);
    assert_eq!(def.name(), Some("Viewer"));
    assert_eq!(def.selection_set(), &selection_set(&["me"]));
    assert!(def.directives().is_empty());
    assert!(def.repr().ends_with(" subscription Viewer>"));
}

#[test]
fn operation_requires_selection_set() {
    assert_eq!(
        OperationDefinition::build([("type", OperationType::Query.into())]),
        Err(NodeBuildError::MissingField {
            type_name: "OperationDefinition",
            field_name: "selection_set",
        }),
    );
}

#[test]
fn fragment_requires_type_condition() {
    assert_eq!(
        FragmentDefinition::build([
            ("name", "F".into()),
            ("selection_set", selection_set(&["id"]).into()),
        ]),
        Err(NodeBuildError::MissingField {
            type_name: "FragmentDefinition",
            field_name: "on",
        }),
    );

    let frag = FragmentDefinition::build([
        ("name", "F".into()),
        ("on", "User".into()),
        ("selection_set", selection_set(&["id"]).into()),
    ]).unwrap();
    assert_eq!(frag, FragmentDefinition::new("F", "User", selection_set(&["id"])));
    assert!(frag.repr().ends_with(" F on User>"));
}

#[test]
fn operation_type_keywords() {
    for op_type in [
        OperationType::Mutation,
        OperationType::Query,
        OperationType::Subscription,
    ] {
        assert_eq!(OperationType::from_keyword(op_type.as_str()), Some(op_type));
        assert_eq!(op_type.to_string(), op_type.as_str());
    }
    assert_eq!(OperationType::from_keyword("Query"), None);
}

//! Tests for keyword-style construction through [`BoundFields::bind`].

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Field;
use crate::ast::IntegerLiteral;
use crate::ast::ListLiteral;
use crate::ast::NodeKind;
use crate::ast::ObjectField;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::StringLiteral;
use crate::ast::Variable;
use crate::ast::VariableType;
use crate::schema::AstNode;
use crate::schema::BoundFields;
use crate::schema::FieldType;
use crate::schema::FieldValue;
use crate::schema::NodeBuildError;
use crate::schema::NodeClass;
use crate::tests::ast_test_utils::int;

#[test]
fn omitted_required_field_is_missing() {
    assert_eq!(
        Field::build([("alias", "a".into())]),
        Err(NodeBuildError::MissingField {
            type_name: "Field",
            field_name: "name",
        }),
    );
}

#[test]
fn explicit_null_for_required_field_is_missing() {
    assert_eq!(
        StringLiteral::build([("value", FieldValue::Null)]),
        Err(NodeBuildError::MissingField {
            type_name: "StringLiteral",
            field_name: "value",
        }),
    );
}

#[test]
fn explicit_null_for_defaulted_field_takes_default() {
    let field = Field::build([
        ("name", "f".into()),
        ("arguments", FieldValue::Null),
    ]).unwrap();
    assert!(field.arguments.is_empty());

    let var_type = VariableType::build([
        ("name", "Int".into()),
        ("nullable", FieldValue::Null),
    ]).unwrap();
    assert!(var_type.nullable);
}

#[test]
fn unknown_field_is_rejected() {
    assert_eq!(
        Variable::build([("value", "id".into()), ("nmae", "x".into())]),
        Err(NodeBuildError::UnknownField {
            type_name: "Variable",
            field_name: "nmae".to_string(),
        }),
    );
}

#[test]
fn field_supplied_twice_is_rejected() {
    assert_eq!(
        Directive::build([("name", "a".into()), ("name", "b".into())]),
        Err(NodeBuildError::DuplicateField {
            type_name: "Directive",
            field_name: "name",
        }),
    );
}

#[test]
fn wrong_scalar_type_is_rejected() {
    let err = Field::build([("name", 5.into())]).unwrap_err();
    assert_eq!(
        err,
        NodeBuildError::FieldTypeMismatch {
            type_name: "Field",
            field_name: "name",
            expected: FieldType::String,
            found: "an integer",
        },
    );
    assert_eq!(
        err.to_string(),
        "`Field.name` expects a string, but an integer was supplied",
    );
}

#[test]
fn wrong_node_kind_is_rejected() {
    // A variable is a value but not a literal.
    let err = ObjectField::build([
        ("name", "x".into()),
        ("value", Variable::new("v").into()),
    ]).unwrap_err();
    assert_eq!(
        err,
        NodeBuildError::FieldTypeMismatch {
            type_name: "ObjectField",
            field_name: "value",
            expected: FieldType::Node(NodeClass::Literal),
            found: "Variable",
        },
    );
}

#[test]
fn list_items_are_checked() {
    let err = ListLiteral::build([(
        "value",
        FieldValue::List(vec![int(1).into(), Directive::new("d").into()]),
    )]).unwrap_err();
    assert!(matches!(
        err,
        NodeBuildError::FieldTypeMismatch {
            field_name: "value",
            found: "a list",
            ..
        },
    ));
}

#[test]
fn argument_value_accepts_literal_or_variable() {
    let with_literal = Argument::build([
        ("name", "id".into()),
        ("value", IntegerLiteral::new(4).into()),
    ]).unwrap();
    assert_eq!(with_literal.value.as_literal(), Some(&int(4)));

    let with_variable = Argument::build([
        ("name", "id".into()),
        ("value", Variable::new("id").into()),
    ]).unwrap();
    assert_eq!(with_variable.value.as_variable(), Some(&Variable::new("id")));

    assert!(Argument::build([
        ("name", "id".into()),
        ("value", SelectionSet::default().into()),
    ]).is_err());
}

#[test]
fn operation_type_must_be_a_known_keyword() {
    let op = OperationDefinition::build([
        ("type", OperationType::Mutation.into()),
        ("selection_set", SelectionSet::default().into()),
    ]).unwrap();
    assert_eq!(op.operation_type, Some(OperationType::Mutation));

    let err = OperationDefinition::build([
        ("type", "mutate".into()),
        ("selection_set", SelectionSet::default().into()),
    ]).unwrap_err();
    assert_eq!(
        err,
        NodeBuildError::FieldTypeMismatch {
            type_name: "OperationDefinition",
            field_name: "type",
            expected: FieldType::OperationType,
            found: "a string",
        },
    );
}

/// Every construction gets its own container; mutating one node's default
/// list never affects another node.
#[test]
fn defaults_are_fresh_per_construction() {
    let mut first = Field::build([("name", "a".into())]).unwrap();
    let second = Field::build([("name", "b".into())]).unwrap();
    first.arguments.push(Argument::new("x", int(1)));

    assert_eq!(first.arguments.len(), 1);
    assert!(second.arguments.is_empty());
}

#[test]
fn bind_fills_every_declared_field_in_order() {
    let bound = BoundFields::bind(
        NodeKind::Field.schema(),
        [("name", "f".into())],
    ).unwrap();

    assert_eq!(bound.schema().type_name, "Field");
    assert_eq!(bound.get("context"), Some(&FieldValue::Null));
    assert_eq!(bound.get("alias"), Some(&FieldValue::Null));
    assert_eq!(bound.get("name"), Some(&FieldValue::from("f")));
    assert_eq!(bound.get("arguments"), Some(&FieldValue::List(vec![])));
    assert_eq!(bound.get("directives"), Some(&FieldValue::List(vec![])));
    assert_eq!(bound.get("selection_set"), Some(&FieldValue::Null));
    assert_eq!(bound.get("bogus"), None);
}

#[test]
fn option_values_map_to_null() {
    let field = Field::build([
        ("name", "f".into()),
        ("alias", Option::<String>::None.into()),
    ]).unwrap();
    assert_eq!(field.alias, None);

    let field = Field::build([
        ("name", "f".into()),
        ("alias", Some("g").into()),
    ]).unwrap();
    assert_eq!(field.response_key(), "g");
}

#[test]
fn error_messages_name_the_field() {
    assert_eq!(
        NodeBuildError::MissingField {
            type_name: "Argument",
            field_name: "value",
        }.to_string(),
        "`Argument.value` is required but was not supplied",
    );
    assert_eq!(
        NodeBuildError::UnknownField {
            type_name: "Argument",
            field_name: "x".to_string(),
        }.to_string(),
        "`Argument` does not declare a field named `x`",
    );
    assert_eq!(
        NodeBuildError::DuplicateField {
            type_name: "Argument",
            field_name: "name",
        }.to_string(),
        "`Argument.name` was supplied more than once",
    );
}

#[test]
fn nested_list_type_describes_items() {
    assert_eq!(
        FieldType::List(&FieldType::Node(NodeClass::Exactly(NodeKind::Argument)))
            .to_string(),
        "a list where each item is a `Argument` node",
    );
}

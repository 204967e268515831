//! Tests for [`VariableDefinition`] and [`VariableType`].

use crate::ast::OperationDefinition;
use crate::ast::SelectionSet;
use crate::ast::StringLiteral;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::ast::VariableType;
use crate::schema::AstNode;
use crate::schema::FieldValue;
use crate::schema::NodeBuildError;
use crate::NativeValue;

#[test]
fn variable_type_defaults_to_nullable_scalar() {
    let var_type = VariableType::build([("name", "Int".into())]).unwrap();
    assert!(var_type.nullable);
    assert!(!var_type.list);
    assert_eq!(var_type, VariableType::new("Int"));
}

#[test]
fn variable_type_display() {
    assert_eq!(VariableType::new("Int").to_string(), "Int");
    assert_eq!(VariableType::new("Int").non_null().to_string(), "Int!");
    assert_eq!(VariableType::new("Int").list_of().to_string(), "[Int]");
    assert_eq!(
        VariableType::new("Int").list_of().non_null().to_string(),
        "[Int]!",
    );
    assert!(VariableType::new("ID").non_null().repr().ends_with(" ID!>"));
}

#[test]
fn variable_type_flags_from_keywords() {
    let var_type = VariableType::build([
        ("name", "String".into()),
        ("nullable", false.into()),
        ("list", true.into()),
    ]).unwrap();
    assert_eq!(var_type, VariableType::new("String").list_of().non_null());
}

#[test]
fn variable_definition_with_default_value() {
    let def = VariableDefinition::build([
        ("name", "greeting".into()),
        ("type", VariableType::new("String").into()),
        ("value", StringLiteral::new("hi").into()),
    ]).unwrap();

    assert_eq!(def.var_type.name, "String");
    assert_eq!(
        def.value.as_ref().map(|lit| lit.to_native_value()),
        Some(NativeValue::String("hi".to_string())),
    );
    assert!(def.repr().ends_with(" $greeting>"));
}

#[test]
fn variable_definition_default_value_is_optional() {
    let def = VariableDefinition::build([
        ("name", "id".into()),
        ("type", VariableType::new("ID").non_null().into()),
    ]).unwrap();
    assert_eq!(def.value, None);
    assert_eq!(
        def,
        VariableDefinition::new("id", VariableType::new("ID").non_null()),
    );
}

#[test]
fn variable_definition_default_must_be_a_literal() {
    let err = VariableDefinition::build([
        ("name", "id".into()),
        ("type", VariableType::new("ID").into()),
        ("value", Variable::new("other").into()),
    ]).unwrap_err();
    assert!(matches!(
        err,
        NodeBuildError::FieldTypeMismatch {
            type_name: "VariableDefinition",
            field_name: "value",
            found: "Variable",
            ..
        },
    ));
}

#[test]
fn variable_definition_requires_type() {
    assert_eq!(
        VariableDefinition::build([("name", "id".into())]),
        Err(NodeBuildError::MissingField {
            type_name: "VariableDefinition",
            field_name: "type",
        }),
    );
}

#[test]
fn operation_variable_lookup() {
    let op = OperationDefinition::build([
        (
            "variables",
            FieldValue::from(vec![
                VariableDefinition::new("a", VariableType::new("Int")),
                VariableDefinition::new("b", VariableType::new("Boolean")),
            ]),
        ),
        ("selection_set", SelectionSet::default().into()),
    ]).unwrap();
    assert_eq!(
        op.variable("b").map(|var| var.var_type.to_string()),
        Some("Boolean".to_string()),
    );
    assert!(op.variable("c").is_none());
}

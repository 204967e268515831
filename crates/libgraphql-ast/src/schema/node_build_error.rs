use crate::schema::FieldType;

/// Errors raised while constructing a node from keyword-style fields.
///
/// All variants are fatal to the construction call that produced them; the
/// caller (typically a parser) is expected to abandon the node and report the
/// failure upward.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NodeBuildError {
    #[error("`{type_name}` does not declare a field named `{field_name}`")]
    UnknownField {
        type_name: &'static str,
        field_name: String,
    },

    #[error("`{type_name}.{field_name}` is required but was not supplied")]
    MissingField {
        type_name: &'static str,
        field_name: &'static str,
    },

    #[error(
        "`{type_name}.{field_name}` expects {expected}, but {found} was \
        supplied"
    )]
    FieldTypeMismatch {
        type_name: &'static str,
        field_name: &'static str,
        expected: FieldType,
        found: &'static str,
    },

    #[error("`{type_name}.{field_name}` was supplied more than once")]
    DuplicateField {
        type_name: &'static str,
        field_name: &'static str,
    },
}

use crate::ast::Directive;
use crate::ast::FragmentDefinition;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::ast::SelectionSet;
use crate::schema::AstNode;
use crate::schema::FieldDescriptor;
use crate::schema::FieldType;
use crate::schema::NodeClass;
use crate::schema::NodeContext;

/// `name`, inherited by every definition. Anonymous operations have none.
pub(crate) const DEFINITION_NAME_FIELD: FieldDescriptor =
    FieldDescriptor::optional("name", FieldType::String);

/// `selection_set`, inherited by every definition.
pub(crate) const DEFINITION_SELECTION_SET_FIELD: FieldDescriptor =
    FieldDescriptor::required(
        "selection_set",
        FieldType::Node(NodeClass::Exactly(NodeKind::SelectionSet)),
    );

/// A top-level executable definition within a [`Document`](crate::ast::Document).
///
/// See
/// [Executable Definitions](https://spec.graphql.org/September2025/#sec-Executable-Definitions).
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Fragment(FragmentDefinition),
    Operation(OperationDefinition),
}

impl Definition {
    pub fn kind(&self) -> NodeKind {
        match self {
            Definition::Fragment(_) => NodeKind::FragmentDefinition,
            Definition::Operation(_) => NodeKind::OperationDefinition,
        }
    }

    pub fn context(&self) -> &NodeContext {
        match self {
            Definition::Fragment(def) => def.context(),
            Definition::Operation(def) => def.context(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Fragment(def) => def.name.as_deref(),
            Definition::Operation(def) => def.name.as_deref(),
        }
    }

    pub fn selection_set(&self) -> &SelectionSet {
        match self {
            Definition::Fragment(def) => &def.selection_set,
            Definition::Operation(def) => &def.selection_set,
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            Definition::Fragment(def) => &def.directives,
            Definition::Operation(def) => &def.directives,
        }
    }

    pub fn repr(&self) -> String {
        match self {
            Definition::Fragment(def) => def.repr(),
            Definition::Operation(def) => def.repr(),
        }
    }
}

impl From<FragmentDefinition> for Definition {
    fn from(def: FragmentDefinition) -> Self {
        Definition::Fragment(def)
    }
}

impl From<OperationDefinition> for Definition {
    fn from(def: OperationDefinition) -> Self {
        Definition::Operation(def)
    }
}

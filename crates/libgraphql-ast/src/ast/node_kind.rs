use crate::ast::Argument;
use crate::ast::BooleanLiteral;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::EnumLiteral;
use crate::ast::Field;
use crate::ast::FloatLiteral;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::IntegerLiteral;
use crate::ast::ListLiteral;
use crate::ast::ObjectField;
use crate::ast::ObjectLiteral;
use crate::ast::OperationDefinition;
use crate::ast::SelectionSet;
use crate::ast::StringLiteral;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::ast::VariableType;
use crate::schema::AstNode;
use crate::schema::NodeSchema;

/// Variant tag identifying the concrete type of a node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Argument,
    BooleanLiteral,
    Directive,
    Document,
    EnumLiteral,
    Field,
    FloatLiteral,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    IntegerLiteral,
    ListLiteral,
    ObjectField,
    ObjectLiteral,
    OperationDefinition,
    SelectionSet,
    StringLiteral,
    Variable,
    VariableDefinition,
    VariableType,
}

impl NodeKind {
    pub const ALL: [NodeKind; 20] = [
        NodeKind::Argument,
        NodeKind::BooleanLiteral,
        NodeKind::Directive,
        NodeKind::Document,
        NodeKind::EnumLiteral,
        NodeKind::Field,
        NodeKind::FloatLiteral,
        NodeKind::FragmentDefinition,
        NodeKind::FragmentSpread,
        NodeKind::InlineFragment,
        NodeKind::IntegerLiteral,
        NodeKind::ListLiteral,
        NodeKind::ObjectField,
        NodeKind::ObjectLiteral,
        NodeKind::OperationDefinition,
        NodeKind::SelectionSet,
        NodeKind::StringLiteral,
        NodeKind::Variable,
        NodeKind::VariableDefinition,
        NodeKind::VariableType,
    ];

    pub fn schema(self) -> &'static NodeSchema {
        match self {
            NodeKind::Argument => Argument::schema(),
            NodeKind::BooleanLiteral => BooleanLiteral::schema(),
            NodeKind::Directive => Directive::schema(),
            NodeKind::Document => Document::schema(),
            NodeKind::EnumLiteral => EnumLiteral::schema(),
            NodeKind::Field => Field::schema(),
            NodeKind::FloatLiteral => FloatLiteral::schema(),
            NodeKind::FragmentDefinition => FragmentDefinition::schema(),
            NodeKind::FragmentSpread => FragmentSpread::schema(),
            NodeKind::InlineFragment => InlineFragment::schema(),
            NodeKind::IntegerLiteral => IntegerLiteral::schema(),
            NodeKind::ListLiteral => ListLiteral::schema(),
            NodeKind::ObjectField => ObjectField::schema(),
            NodeKind::ObjectLiteral => ObjectLiteral::schema(),
            NodeKind::OperationDefinition => OperationDefinition::schema(),
            NodeKind::SelectionSet => SelectionSet::schema(),
            NodeKind::StringLiteral => StringLiteral::schema(),
            NodeKind::Variable => Variable::schema(),
            NodeKind::VariableDefinition => VariableDefinition::schema(),
            NodeKind::VariableType => VariableType::schema(),
        }
    }

    pub fn type_name(self) -> &'static str {
        self.schema().type_name
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            NodeKind::BooleanLiteral
                | NodeKind::EnumLiteral
                | NodeKind::FloatLiteral
                | NodeKind::IntegerLiteral
                | NodeKind::ListLiteral
                | NodeKind::ObjectLiteral
                | NodeKind::StringLiteral
        )
    }

    pub fn is_definition(self) -> bool {
        matches!(
            self,
            NodeKind::FragmentDefinition | NodeKind::OperationDefinition
        )
    }

    pub fn is_selection(self) -> bool {
        matches!(
            self,
            NodeKind::Field
                | NodeKind::FragmentSpread
                | NodeKind::InlineFragment
        )
    }
}

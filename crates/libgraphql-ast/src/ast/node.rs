use crate::ast::Argument;
use crate::ast::BooleanLiteral;
use crate::ast::Definition;
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
use crate::ast::LiteralNode;
use crate::ast::NodeKind;
use crate::ast::ObjectField;
use crate::ast::ObjectLiteral;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringLiteral;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::ast::VariableType;
use crate::schema::AstNode;
use crate::schema::FieldValue;
use crate::schema::FromFieldValue;
use crate::schema::NodeContext;
use crate::schema::Result;

/// Any node, as carried inside a [`FieldValue`] during keyword-style
/// construction.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Argument(Argument),
    Definition(Definition),
    Directive(Directive),
    Document(Document),
    Literal(LiteralNode),
    ObjectField(ObjectField),
    Selection(Selection),
    SelectionSet(SelectionSet),
    Variable(Variable),
    VariableDefinition(VariableDefinition),
    VariableType(VariableType),
}

impl Node {
    /// Construct a node of the given `kind` from keyword-style fields.
    ///
    /// This is the entry point for grammar actions that only know the node
    /// kind at runtime.
    pub fn build<'a, I>(kind: NodeKind, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, FieldValue)>,
    {
        Ok(match kind {
            NodeKind::Argument => Argument::build(fields)?.into(),
            NodeKind::BooleanLiteral => BooleanLiteral::build(fields)?.into(),
            NodeKind::Directive => Directive::build(fields)?.into(),
            NodeKind::Document => Document::build(fields)?.into(),
            NodeKind::EnumLiteral => EnumLiteral::build(fields)?.into(),
            NodeKind::Field => Field::build(fields)?.into(),
            NodeKind::FloatLiteral => FloatLiteral::build(fields)?.into(),
            NodeKind::FragmentDefinition =>
                FragmentDefinition::build(fields)?.into(),
            NodeKind::FragmentSpread => FragmentSpread::build(fields)?.into(),
            NodeKind::InlineFragment => InlineFragment::build(fields)?.into(),
            NodeKind::IntegerLiteral => IntegerLiteral::build(fields)?.into(),
            NodeKind::ListLiteral => ListLiteral::build(fields)?.into(),
            NodeKind::ObjectField => ObjectField::build(fields)?.into(),
            NodeKind::ObjectLiteral => ObjectLiteral::build(fields)?.into(),
            NodeKind::OperationDefinition =>
                OperationDefinition::build(fields)?.into(),
            NodeKind::SelectionSet => SelectionSet::build(fields)?.into(),
            NodeKind::StringLiteral => StringLiteral::build(fields)?.into(),
            NodeKind::Variable => Variable::build(fields)?.into(),
            NodeKind::VariableDefinition =>
                VariableDefinition::build(fields)?.into(),
            NodeKind::VariableType => VariableType::build(fields)?.into(),
        })
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Argument(_) => NodeKind::Argument,
            Node::Definition(def) => def.kind(),
            Node::Directive(_) => NodeKind::Directive,
            Node::Document(_) => NodeKind::Document,
            Node::Literal(lit) => lit.kind(),
            Node::ObjectField(_) => NodeKind::ObjectField,
            Node::Selection(sel) => sel.kind(),
            Node::SelectionSet(_) => NodeKind::SelectionSet,
            Node::Variable(_) => NodeKind::Variable,
            Node::VariableDefinition(_) => NodeKind::VariableDefinition,
            Node::VariableType(_) => NodeKind::VariableType,
        }
    }

    pub fn context(&self) -> &NodeContext {
        match self {
            Node::Argument(n) => n.context(),
            Node::Definition(n) => n.context(),
            Node::Directive(n) => n.context(),
            Node::Document(n) => n.context(),
            Node::Literal(n) => n.context(),
            Node::ObjectField(n) => n.context(),
            Node::Selection(n) => n.context(),
            Node::SelectionSet(n) => n.context(),
            Node::Variable(n) => n.context(),
            Node::VariableDefinition(n) => n.context(),
            Node::VariableType(n) => n.context(),
        }
    }

    pub fn repr(&self) -> String {
        match self {
            Node::Argument(n) => n.repr(),
            Node::Definition(n) => n.repr(),
            Node::Directive(n) => n.repr(),
            Node::Document(n) => n.repr(),
            Node::Literal(n) => n.repr(),
            Node::ObjectField(n) => n.repr(),
            Node::Selection(n) => n.repr(),
            Node::SelectionSet(n) => n.repr(),
            Node::Variable(n) => n.repr(),
            Node::VariableDefinition(n) => n.repr(),
            Node::VariableType(n) => n.repr(),
        }
    }
}

/// Wires a node type into [`Node`] and [`FieldValue`] in both directions.
///
/// The first form is for types with their own [`Node`] variant; the second
/// for members of a node family (`Node::Literal(LiteralNode::String(_))`).
macro_rules! node_conversions {
    ($ty:ident => Node::$variant:ident) => {
        impl From<$ty> for Node {
            fn from(node: $ty) -> Self {
                Node::$variant(node)
            }
        }

        impl From<$ty> for FieldValue {
            fn from(node: $ty) -> Self {
                FieldValue::Node(Node::$variant(node))
            }
        }

        impl FromFieldValue for $ty {
            fn from_field_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::Node(Node::$variant(node)) => Some(node),
                    _ => None,
                }
            }
        }
    };

    ($ty:ident => Node::$variant:ident($family:ident::$member:ident)) => {
        impl From<$ty> for Node {
            fn from(node: $ty) -> Self {
                Node::$variant($family::$member(node))
            }
        }

        impl From<$ty> for FieldValue {
            fn from(node: $ty) -> Self {
                FieldValue::Node(Node::$variant($family::$member(node)))
            }
        }

        impl FromFieldValue for $ty {
            fn from_field_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::Node(Node::$variant($family::$member(node))) =>
                        Some(node),
                    _ => None,
                }
            }
        }
    };
}

node_conversions!(Argument => Node::Argument);
node_conversions!(Definition => Node::Definition);
node_conversions!(Directive => Node::Directive);
node_conversions!(Document => Node::Document);
node_conversions!(LiteralNode => Node::Literal);
node_conversions!(ObjectField => Node::ObjectField);
node_conversions!(Selection => Node::Selection);
node_conversions!(SelectionSet => Node::SelectionSet);
node_conversions!(Variable => Node::Variable);
node_conversions!(VariableDefinition => Node::VariableDefinition);
node_conversions!(VariableType => Node::VariableType);

node_conversions!(BooleanLiteral => Node::Literal(LiteralNode::Boolean));
node_conversions!(EnumLiteral => Node::Literal(LiteralNode::Enum));
node_conversions!(FloatLiteral => Node::Literal(LiteralNode::Float));
node_conversions!(IntegerLiteral => Node::Literal(LiteralNode::Integer));
node_conversions!(ListLiteral => Node::Literal(LiteralNode::List));
node_conversions!(ObjectLiteral => Node::Literal(LiteralNode::Object));
node_conversions!(StringLiteral => Node::Literal(LiteralNode::String));

node_conversions!(FragmentDefinition => Node::Definition(Definition::Fragment));
node_conversions!(OperationDefinition => Node::Definition(Definition::Operation));

node_conversions!(Field => Node::Selection(Selection::Field));
node_conversions!(FragmentSpread => Node::Selection(Selection::FragmentSpread));
node_conversions!(InlineFragment => Node::Selection(Selection::InlineFragment));

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Literal(lit) => Node::Literal(lit),
            Value::Variable(var) => Node::Variable(var),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Node(value.into())
    }
}

impl FromFieldValue for Value {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Node(Node::Literal(lit)) => Some(Value::Literal(lit)),
            FieldValue::Node(Node::Variable(var)) => Some(Value::Variable(var)),
            _ => None,
        }
    }
}

use crate::ast::LiteralNode;
use crate::ast::NodeKind;
use crate::ast::Variable;
use crate::schema::NodeContext;

/// Anything that may appear in argument position: a constant literal or a
/// variable reference.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Literal(LiteralNode),
    Variable(Variable),
}

impl Value {
    pub fn kind(&self) -> NodeKind {
        match self {
            Value::Literal(lit) => lit.kind(),
            Value::Variable(_) => NodeKind::Variable,
        }
    }

    pub fn context(&self) -> &NodeContext {
        match self {
            Value::Literal(lit) => lit.context(),
            Value::Variable(var) => var.context(),
        }
    }

    pub fn as_literal(&self) -> Option<&LiteralNode> {
        if let Value::Literal(lit) = self {
            Some(lit)
        } else {
            None
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        if let Value::Variable(var) = self {
            Some(var)
        } else {
            None
        }
    }
}

impl From<LiteralNode> for Value {
    fn from(lit: LiteralNode) -> Self {
        Value::Literal(lit)
    }
}

impl From<Variable> for Value {
    fn from(var: Variable) -> Self {
        Value::Variable(var)
    }
}

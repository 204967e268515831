use crate::ast::Directive;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::NodeKind;
use crate::schema::AstNode;
use crate::schema::NodeContext;

/// A single selection within a selection set.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets).
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn kind(&self) -> NodeKind {
        match self {
            Selection::Field(_) => NodeKind::Field,
            Selection::FragmentSpread(_) => NodeKind::FragmentSpread,
            Selection::InlineFragment(_) => NodeKind::InlineFragment,
        }
    }

    pub fn context(&self) -> &NodeContext {
        match self {
            Selection::Field(s) => s.context(),
            Selection::FragmentSpread(s) => s.context(),
            Selection::InlineFragment(s) => s.context(),
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            Selection::Field(s) => &s.directives,
            Selection::FragmentSpread(s) => &s.directives,
            Selection::InlineFragment(s) => &s.directives,
        }
    }

    pub fn repr(&self) -> String {
        match self {
            Selection::Field(s) => s.repr(),
            Selection::FragmentSpread(s) => s.repr(),
            Selection::InlineFragment(s) => s.repr(),
        }
    }
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Selection::Field(field)
    }
}

impl From<FragmentSpread> for Selection {
    fn from(spread: FragmentSpread) -> Self {
        Selection::FragmentSpread(spread)
    }
}

impl From<InlineFragment> for Selection {
    fn from(fragment: InlineFragment) -> Self {
        Selection::InlineFragment(fragment)
    }
}

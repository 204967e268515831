use crate::GraphQLSourceSpan;

/// The hidden source-position attachment carried by every node.
///
/// A `NodeContext` never participates in structural comparison: any two
/// contexts compare equal, so two nodes that differ only in where they were
/// parsed from are equal.
#[derive(Clone, Debug, Default)]
pub struct NodeContext {
    span: Option<GraphQLSourceSpan>,
}

impl NodeContext {
    pub fn new(span: GraphQLSourceSpan) -> Self {
        Self { span: Some(span) }
    }

    /// A context with no position information attached.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn span(&self) -> Option<&GraphQLSourceSpan> {
        self.span.as_ref()
    }

    pub fn is_none(&self) -> bool {
        self.span.is_none()
    }
}

impl PartialEq for NodeContext {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl From<GraphQLSourceSpan> for NodeContext {
    fn from(span: GraphQLSourceSpan) -> Self {
        Self::new(span)
    }
}

impl From<Option<GraphQLSourceSpan>> for NodeContext {
    fn from(span: Option<GraphQLSourceSpan>) -> Self {
        Self { span }
    }
}

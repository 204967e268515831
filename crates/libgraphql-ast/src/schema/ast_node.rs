use crate::schema::BoundFields;
use crate::schema::FieldValue;
use crate::schema::NodeContext;
use crate::schema::NodeSchema;
use crate::schema::Result;
use crate::GraphQLSourceSpan;

/// Trait implemented by every concrete node type.
///
/// Concrete node types implement this trait via `#[inherent] impl AstNode`,
/// so [`schema()`](AstNode::schema), [`context()`](AstNode::context) and
/// friends are callable without importing the trait. The provided
/// construction and display helpers need the trait in scope.
pub trait AstNode: Sized {
    /// The static field table describing this node type.
    fn schema() -> &'static NodeSchema;

    /// Build the node from fields already validated against
    /// [`schema()`](AstNode::schema).
    fn from_bound_fields(fields: BoundFields) -> Result<Self>;

    /// The hidden source-position attachment.
    fn context(&self) -> &NodeContext;

    /// Type-specific suffix for [`repr()`](AstNode::repr).
    fn extra_repr(&self) -> String {
        String::new()
    }

    /// Construct a node from keyword-style `(field name, value)` pairs.
    ///
    /// Omitted fields take their declared default (freshly produced for
    /// every call) or stay absent.
    fn build<'a, I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, FieldValue)>,
    {
        Self::from_bound_fields(BoundFields::bind(Self::schema(), fields)?)
    }

    /// Like [`build()`](AstNode::build), attaching `span` as the node's
    /// context.
    fn build_with_context<'a, I>(span: GraphQLSourceSpan, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, FieldValue)>,
    {
        Self::build(std::iter::once(("context", FieldValue::from(span))).chain(fields))
    }

    /// Diagnostic representation of the form
    /// `<graphql.TypeName at 0x...>`. Not suitable for round-tripping.
    fn repr(&self) -> String {
        let schema = Self::schema();
        format!(
            "<{}.{} at {:p}{}>",
            schema.namespace,
            schema.type_name,
            self,
            self.extra_repr(),
        )
    }
}

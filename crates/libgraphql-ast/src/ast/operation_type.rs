use std::fmt;

/// The kind of a GraphQL operation.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase"),
)]
pub enum OperationType {
    Mutation,
    Query,
    Subscription,
}

impl OperationType {
    /// Look up the operation type named by a GraphQL keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "mutation" => Some(OperationType::Mutation),
            "query" => Some(OperationType::Query),
            "subscription" => Some(OperationType::Subscription),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Mutation => "mutation",
            OperationType::Query => "query",
            OperationType::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

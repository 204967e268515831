use indexmap::IndexMap;

/// Structured data corresponding to the content of a literal node,
/// independent of how it was written in source text.
///
/// Object entries keep the order in which they appeared in the source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(untagged),
)]
pub enum NativeValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// An enum value name. Serializes as a plain string.
    Enum(String),
    List(Vec<NativeValue>),
    Object(IndexMap<String, NativeValue>),
}

impl NativeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) | Self::Enum(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[NativeValue]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, NativeValue>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }
}

/// Conversion of a literal subtree into its [`NativeValue`].
///
/// Implemented by every literal node type via `#[inherent]`, so the method is
/// available without importing this trait.
pub trait ToNativeValue {
    fn to_native_value(&self) -> NativeValue;
}

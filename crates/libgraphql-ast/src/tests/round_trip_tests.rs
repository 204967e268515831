//! Property tests for the literal conversion laws.

use crate::ast::LiteralNode;
use crate::ast::StringLiteral;
use crate::tests::graphql_string_utils::read_graphql_string_literal;
use crate::NativeValue;
use proptest::prelude::*;
use regex::Regex;
use std::sync::LazyLock;

// A backslash the emitter reads as the start of an escape.
static COLLAPSED_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([bf]|u[0-9a-fA-F]{4})").unwrap());

fn native_value_strategy() -> impl Strategy<Value = NativeValue> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(NativeValue::Boolean),
        any::<i64>().prop_map(NativeValue::Int),
        (-1.0e12..1.0e12f64).prop_map(NativeValue::Float),
        ".{0,8}".prop_map(NativeValue::String),
        "[A-Z_][A-Z0-9_]{0,6}".prop_map(NativeValue::Enum),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(NativeValue::List),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4).prop_map(
                |entries| NativeValue::Object(entries.into_iter().collect()),
            ),
        ]
    })
}

proptest! {
    #[test]
    fn source_text_without_backslashes_reads_back(value in "[^\\\\]*") {
        let text = StringLiteral::new(value.as_str()).to_source_text();
        prop_assert!(text.starts_with('"') && text.ends_with('"'));
        prop_assert_eq!(read_graphql_string_literal(&text), Ok(value));
    }

    #[test]
    fn source_text_reads_back(
        value in any::<String>()
            .prop_filter("collapsed escape", |s| !COLLAPSED_ESCAPE.is_match(s)),
    ) {
        let text = StringLiteral::new(value.as_str()).to_source_text();
        prop_assert_eq!(read_graphql_string_literal(&text), Ok(value));
    }

    #[test]
    fn native_value_round_trips(native in native_value_strategy()) {
        let node = LiteralNode::from_native_value(&native).unwrap();
        prop_assert_eq!(node.to_native_value(), native);
    }

    #[test]
    fn source_text_of_slash_free_value_has_no_bare_slash(value in "[a-z/]{0,12}") {
        let text = StringLiteral::new(value.as_str()).to_source_text();
        let bare_slashes = text
            .match_indices('/')
            .filter(|(idx, _)| !text[..*idx].ends_with('\\'))
            .count();
        prop_assert_eq!(bare_slashes, 0);
    }
}

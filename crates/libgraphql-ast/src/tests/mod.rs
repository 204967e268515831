pub(crate) mod ast_test_utils;
pub(crate) mod graphql_string_utils;
mod round_trip_tests;

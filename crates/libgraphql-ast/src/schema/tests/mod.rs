mod ast_node_tests;
mod bound_fields_tests;

mod document_tests;
mod variable_definition_tests;

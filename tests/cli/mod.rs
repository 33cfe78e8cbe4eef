//! CLI end-to-end tests

mod extract_tests;

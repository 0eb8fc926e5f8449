//! Unit tests

mod prompt_test;

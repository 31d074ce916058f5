//! Integration tests against the public API

pub mod config_test;
pub mod input_test;

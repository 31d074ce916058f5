//! Property-based tests

pub mod visibility_proptest;

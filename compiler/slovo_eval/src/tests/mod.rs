//! Tests for the operator tables and the `evaluate` entry point.

mod evaluate_tests;
mod operators_tests;
mod unary_operators_tests;

//! Parser tests.
//!
//! - `parser`: statement forms, precedence and canonical rendering
//! - `recovery`: diagnostics and error recovery

mod recovery;

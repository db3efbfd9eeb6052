//! Integration tests for the Comet CLI.
//!
//! These tests run the `comet` binary end to end.
//!
//! # Test Categories
//!
//! - **Compute tests**: offline evaluation of storage words, table and JSON output
//! - **CLI validation tests**: Argument parsing, help text, error handling
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p comet-rs-cli --test integration
//! ```

mod integration {
    pub mod helpers;
    pub mod cli_validation_tests;
    pub mod compute_tests;
}

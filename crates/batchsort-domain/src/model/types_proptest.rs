//! Property-based tests for batch types.

//! Common test utilities for surfsup.
//!
//! This module provides shared utilities for testing the surfsup server.

// Re-export all common test utilities
pub mod assertions;
pub mod http_client;
pub mod test_data;

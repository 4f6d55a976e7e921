//! Scanner Integration Test Modules

//! Scanner unit tests
//!
//! Run against an in-memory history so ordering and failure paths can be driven
//! precisely without touching git.

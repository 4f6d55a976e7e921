//! Core services and infrastructure

pub mod logging;
pub mod shutdown;
pub mod styles;
pub mod version;

//! Common test utilities and helpers
//!
//! Scratch git repositories built with the `git` command line, plus a wrapper
//! around the application entry point that captures both output streams.

#![allow(dead_code)]

pub mod run_helpers;

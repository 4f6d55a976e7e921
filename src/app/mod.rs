//! Application module

pub mod cli;
pub mod error;
pub mod output;
pub mod startup;
pub mod terminal;

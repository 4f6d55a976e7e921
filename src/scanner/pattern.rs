//! Search pattern
//!
//! Compiled once per run and shared by every scan.

use regex::Regex;
use std::sync::Arc;

/// Regular expression tested against whole commit messages
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Arc<Regex>,
}

impl SearchPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self {
            regex: Arc::new(regex),
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

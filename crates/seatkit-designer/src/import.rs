//! Guest list import.
//!
//! Turns free text, one name per line, into name parts. Lines are split on whitespace:
//! a single token is a first name, otherwise the first token is the last name, the second
//! the first name and anything after that the middle name.

use std::path::Path;

use anyhow::{Context, Result};

/// Name parts of one imported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
}

/// Parses one line. Returns `None` for a blank line.
pub fn parse_name_line(line: &str) -> Option<ParsedName> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => None,
        [first] => Some(ParsedName {
            first_name: first.to_string(),
            last_name: String::new(),
            middle_name: None,
        }),
        [last, first] => Some(ParsedName {
            first_name: first.to_string(),
            last_name: last.to_string(),
            middle_name: None,
        }),
        [last, first, rest @ ..] => Some(ParsedName {
            first_name: first.to_string(),
            last_name: last.to_string(),
            middle_name: Some(rest.join(" ")),
        }),
    }
}

/// Parses newline separated names, skipping blank lines.
pub fn parse_guest_list(text: &str) -> Vec<ParsedName> {
    text.lines().filter_map(parse_name_line).collect()
}

/// Reads and parses a guest list file.
pub fn read_guest_list(path: impl AsRef<Path>) -> Result<Vec<ParsedName>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read guest list {}", path.display()))?;
    let names = parse_guest_list(&text);
    tracing::info!("Read {} names from {}", names.len(), path.display());
    Ok(names)
}

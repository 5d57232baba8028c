// Parsing user-entered text into heap keys

use super::errors::HeapError;
use super::Key;

/// Parse a single key, rejecting empty, non-numeric and non-finite text
pub fn parse_key(text: &str) -> Result<Key, HeapError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(HeapError::InvalidInput("no value entered".to_string()));
    }

    let value: Key = trimmed
        .parse()
        .map_err(|_| HeapError::InvalidInput(format!("'{}' is not a number", trimmed)))?;

    if !value.is_finite() {
        return Err(HeapError::InvalidInput(format!(
            "'{}' is not a finite number",
            trimmed
        )));
    }
    Ok(value)
}

/// Parse a comma and/or whitespace separated list of keys
pub fn parse_keys(text: &str) -> Result<Vec<Key>, HeapError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_key)
        .collect()
}

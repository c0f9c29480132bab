// Validation functions for urlparamfilter
// Checks configuration values before they reach the URL model

use crate::error::Error;

/// Characters that would make a delimiter collide with URL structure
const RESERVED_IN_DELIMITER: [char; 3] = ['/', '?', '#'];

/// Validate a path parameter delimiter
///
/// Returns Ok(()) if valid, Err(Error::InvalidDelimiter) if invalid
pub fn validate_delimiter(delimiter: &str) -> Result<(), Error> {
    if delimiter.is_empty() {
        return Err(Error::InvalidDelimiter(
            "delimiter cannot be empty".to_string(),
        ));
    }

    if let Some(ch) = delimiter.chars().find(|c| RESERVED_IN_DELIMITER.contains(c)) {
        return Err(Error::InvalidDelimiter(format!(
            "delimiter '{}' contains reserved character '{}'",
            delimiter, ch
        )));
    }

    // percent-escapes are made of '%' and hex digits, so these would split them apart
    if let Some(ch) = delimiter.chars().find(|c| *c == '%' || c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidDelimiter(format!(
            "delimiter '{}' contains '{}', which clashes with percent-encoding",
            delimiter, ch
        )));
    }

    Ok(())
}

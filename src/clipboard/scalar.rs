use crate::clipboard::{ClipboardError, Result};

const TRUE_LITERAL: &str = "True";
const FALSE_LITERAL: &str = "False";

/// Render a bool using the host's canonical tokens.
pub fn write_bool(value: bool) -> String {
	if value { TRUE_LITERAL.to_owned() } else { FALSE_LITERAL.to_owned() }
}

/// Parse a case-insensitive `True`/`False` token.
pub fn parse_bool(text: &str) -> Result<bool> {
	if text.is_empty() {
		return Err(ClipboardError::EmptyInput);
	}
	if text.eq_ignore_ascii_case(TRUE_LITERAL) {
		return Ok(true);
	}
	if text.eq_ignore_ascii_case(FALSE_LITERAL) {
		return Ok(false);
	}
	Err(ClipboardError::InvalidFormat { detail: format!("expected boolean token, got {text}") })
}

/// Render a signed 32-bit integer as base-10 text.
pub fn write_int(value: i32) -> String {
	value.to_string()
}

/// Parse base-10 signed 32-bit text; overflow is an explicit failure.
pub fn parse_int(text: &str) -> Result<i32> {
	if text.is_empty() {
		return Err(ClipboardError::EmptyInput);
	}
	text.parse::<i32>().map_err(|_| ClipboardError::InvalidNumeric { token: text.to_owned() })
}

/// Render an unsigned 32-bit integer as base-10 text.
pub fn write_uint(value: u32) -> String {
	value.to_string()
}

/// Parse base-10 unsigned 32-bit text; sign and overflow are explicit failures.
pub fn parse_uint(text: &str) -> Result<u32> {
	if text.is_empty() {
		return Err(ClipboardError::EmptyInput);
	}
	text.parse::<u32>().map_err(|_| ClipboardError::InvalidNumeric { token: text.to_owned() })
}

/// Return the string unchanged.
pub fn write_string(value: &str) -> String {
	value.to_owned()
}

/// Identity parse; any input, including empty, is a valid string value.
pub fn parse_string(text: &str) -> Result<String> {
	Ok(text.to_owned())
}

use thiserror::Error;

use crate::clipboard::types::ValueKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Errors produced while parsing clipboard text.
#[derive(Debug, Error)]
pub enum ClipboardError {
	/// Empty text where the kind requires content.
	#[error("empty input")]
	EmptyInput,
	/// Text does not follow the kind's grammar.
	#[error("invalid format: {detail}")]
	InvalidFormat {
		/// Short description of the grammar violation.
		detail: String,
	},
	/// Numeric token failed to parse or overflowed the target width.
	#[error("invalid numeric token: {token}")]
	InvalidNumeric {
		/// Offending token text.
		token: String,
	},
	/// Member token has no normalized match among declared members.
	#[error("unknown member: {token}")]
	UnknownMember {
		/// Offending member token.
		token: String,
	},
	/// Composite field kind tag disagrees with the schema.
	#[error("schema mismatch for field {field}: expected {expected:?}, got {got:?}")]
	SchemaMismatch {
		/// Field name being validated.
		field: String,
		/// Kind the schema declares.
		expected: ValueKind,
		/// Kind found in the encoded payload, if the tag was recognized.
		got: Option<ValueKind>,
	},
}

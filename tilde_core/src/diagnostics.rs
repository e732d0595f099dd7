use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

use crate::tokens::BLOCK_SIGILS;
use crate::tokens::BOX_SIGILS;
use crate::tokens::join_sigils;

/// How serious a diagnostic is. The numeric values line up with the Language
/// Server Protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Severity {
	Error = 0,
	Warning = 1,
	Information = 2,
	Hint = 3,
}

impl Severity {
	pub fn as_u8(self) -> u8 {
		self as u8
	}
}

impl From<Severity> for u8 {
	fn from(severity: Severity) -> Self {
		severity.as_u8()
	}
}

impl TryFrom<u8> for Severity {
	type Error = String;

	fn try_from(value: u8) -> Result<Self, String> {
		match value {
			0 => Ok(Self::Error),
			1 => Ok(Self::Warning),
			2 => Ok(Self::Information),
			3 => Ok(Self::Hint),
			_ => Err(format!("invalid severity: {value}")),
		}
	}
}

/// Every syntax problem the scanners know how to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum DiagnosticCode {
	/// `~` with nothing after it.
	MissingBlockType,
	/// `~` followed by a scalar that is not a block sigil.
	InvalidBlockType,
	/// A block sigil that must be followed by a space is not.
	MissingWhitespace,
	/// A heading with no text.
	MissingHeadingText,
	/// `~>` with nothing after it.
	MissingBoxTypeOrTitle,
}

impl DiagnosticCode {
	/// The machine readable code, e.g. `MISSING_BLOCK_TYPE`.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::MissingBlockType => "MISSING_BLOCK_TYPE",
			Self::InvalidBlockType => "INVALID_BLOCK_TYPE",
			Self::MissingWhitespace => "MISSING_WHITESPACE",
			Self::MissingHeadingText => "MISSING_HEADING_TEXT",
			Self::MissingBoxTypeOrTitle => "MISSING_BOX_TYPE_OR_TITLE",
		}
	}

	/// The full catalog message in `CODE:sentence` form. Option lists are built
	/// from the sigil tables so they never drift from the grammar.
	pub fn message(self) -> String {
		let sentence = match self {
			Self::MissingBlockType | Self::InvalidBlockType => {
				format!(
					"The line is started with a block ('~') command but no valid block type is \
					 provided. Valid options are {}",
					join_sigils(&BLOCK_SIGILS)
				)
			}
			Self::MissingWhitespace => "Expected whitespace.".to_string(),
			Self::MissingHeadingText => "Blank headings are not allowed.".to_string(),
			Self::MissingBoxTypeOrTitle => {
				format!(
					"Box command is missing a box type or title. Valid options are {}",
					join_sigils(&BOX_SIGILS)
				)
			}
		};

		format!("{}:{sentence}", self.as_str())
	}
}

impl Display for DiagnosticCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// A syntax problem found while scanning a document.
///
/// Diagnostics are collected on the parse result and never stop the parse; the
/// offending line simply stops being processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
	/// 1-based line number.
	pub start_line: usize,
	/// 0-based scalar offset of the cursor when the problem was found.
	pub start_character: usize,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end_line: Option<usize>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end_character: Option<usize>,
	pub severity: Severity,
	pub code: DiagnosticCode,
	/// The human message, always prefixed by the code.
	pub message: String,
	/// The code as extracted from `message`.
	pub msg_id: String,
}

impl Diagnostic {
	/// An error pointing at a single position.
	pub fn error(code: DiagnosticCode, start_line: usize, start_character: usize) -> Self {
		let message = code.message();
		let msg_id = error_code(&message).to_string();

		Self {
			start_line,
			start_character,
			end_line: None,
			end_character: None,
			severity: Severity::Error,
			code,
			message,
			msg_id,
		}
	}
}

/// Extract the leading `[A-Z_]+` code from a `CODE:message` string. Returns an
/// empty string when the message has no such prefix.
pub fn error_code(message: &str) -> &str {
	let end = message
		.find(|ch: char| !(ch.is_ascii_uppercase() || ch == '_'))
		.unwrap_or(message.len());

	if end > 0 && message[end..].starts_with(':') {
		&message[..end]
	} else {
		""
	}
}

use miette::Diagnostic;
use thiserror::Error;

/// Errors returned by the library surface.
///
/// Problems in the document text itself are never reported through this type;
/// they are collected as [`crate::Diagnostic`] values on the parse result.
#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TildeError {
	#[error(transparent)]
	#[diagnostic(code(tilde::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(tilde::config_parse),
		help("check that tilde.toml is valid TOML with [grammars] and/or [variables] sections")
	)]
	ConfigParse(String),

	#[error("variable `{path}` cannot be used: {reason}")]
	#[diagnostic(
		code(tilde::invalid_variable),
		help("variables must be finite numbers, strings, booleans, dates, arrays or tables")
	)]
	InvalidVariable { path: String, reason: String },

	#[error("invalid pattern `{name}`: {reason}")]
	#[diagnostic(code(tilde::invalid_pattern))]
	InvalidPattern { name: String, reason: String },

	#[error("pattern `{0}` is declared more than once")]
	#[diagnostic(
		code(tilde::duplicate_pattern),
		help("each token type name must be unique within a pattern set")
	)]
	DuplicatePattern(String),

	#[error("pattern set `{0}` has no patterns")]
	#[diagnostic(code(tilde::empty_pattern_set))]
	EmptyPatternSet(String),

	#[error("{message}")]
	#[diagnostic(code(tilde::invalid_token_sequence))]
	InvalidTokenSequence { message: String, offset: usize },

	#[error("{message}")]
	#[diagnostic(
		code(tilde::empty_token_sequence),
		help("the input produced no tokens to validate")
	)]
	EmptyTokenSequence { message: String },

	#[error("no grammar named `{0}` is configured")]
	#[diagnostic(
		code(tilde::unknown_grammar),
		help("declare it in tilde.toml under `[grammars.{0}]`")
	)]
	UnknownGrammar(String),
}

impl TildeError {
	/// The byte offset that a token-sequence failure points at, if any.
	pub fn offset(&self) -> Option<usize> {
		match self {
			Self::InvalidTokenSequence { offset, .. } => Some(*offset),
			Self::EmptyTokenSequence { .. } => Some(0),
			_ => None,
		}
	}
}

pub type TildeResult<T> = Result<T, TildeError>;

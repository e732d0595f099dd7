use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

use crate::tokens::BlockKind;

/// The structural kind of a physical line, decided once from its raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
	/// `~`
	Block,
	/// four leading spaces
	Code,
	/// `|`
	Table,
	/// `:`
	Meta,
	/// two leading spaces
	Box,
	/// no prefix
	Paragraph,
	/// empty or whitespace only
	BlankLine,
}

impl Display for LineKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Block => "block",
			Self::Code => "code",
			Self::Table => "table",
			Self::Meta => "meta",
			Self::Box => "box",
			Self::Paragraph => "paragraph",
			Self::BlankLine => "blankLine",
		};

		write!(f, "{name}")
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
	/// A structural marker such as `startHeading1`.
	Command,
	Property,
	Text,
}

/// One entry in a line's token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
	#[serde(rename = "type")]
	pub kind: TokenKind,
	pub value: String,
}

impl Token {
	pub fn command(value: impl Into<String>) -> Self {
		Self {
			kind: TokenKind::Command,
			value: value.into(),
		}
	}

	pub fn property(value: impl Into<String>) -> Self {
		Self {
			kind: TokenKind::Property,
			value: value.into(),
		}
	}

	pub fn text(value: impl Into<String>) -> Self {
		Self {
			kind: TokenKind::Text,
			value: value.into(),
		}
	}

	/// Decode a command token into its block-level meaning, if it has one.
	pub fn as_command(&self) -> Option<Command> {
		match self.kind {
			TokenKind::Command => Command::parse(&self.value),
			TokenKind::Property | TokenKind::Text => None,
		}
	}
}

/// A paired block command: `start<Kind>` or `end<Kind>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
	Start(BlockKind),
	End(BlockKind),
}

impl Command {
	pub fn parse(value: &str) -> Option<Self> {
		if let Some(name) = value.strip_prefix("start") {
			return BlockKind::from_name(name).map(Self::Start);
		}

		if let Some(name) = value.strip_prefix("end") {
			return BlockKind::from_name(name).map(Self::End);
		}

		None
	}

	pub fn kind(self) -> BlockKind {
		match self {
			Self::Start(kind) | Self::End(kind) => kind,
		}
	}
}

impl Display for Command {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Start(kind) => write!(f, "start{}", kind.name()),
			Self::End(kind) => write!(f, "end{}", kind.name()),
		}
	}
}

/// Metadata attached to a line by metadata directives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineMeta {
	pub id: String,
	pub labels: Vec<String>,
	pub properties: BTreeMap<String, serde_json::Value>,
}

/// A node in the concrete syntax tree: one physical line of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLine {
	/// 0-based line index.
	pub no: usize,
	/// The raw line text, without its line ending.
	pub text: String,
	#[serde(rename = "type")]
	pub kind: LineKind,
	/// Tokens in emission order.
	pub tokens: Vec<Token>,
	/// Index of the owning line in the CST, for nested content.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent: Option<usize>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meta: Option<LineMeta>,
}

impl SourceLine {
	pub fn new(no: usize, text: impl Into<String>, kind: LineKind) -> Self {
		Self {
			no,
			text: text.into(),
			kind,
			tokens: vec![],
			parent: None,
			meta: None,
		}
	}

	/// The token values, handy for assertions and debugging.
	pub fn token_values(&self) -> Vec<&str> {
		self.tokens.iter().map(|token| token.value.as_str()).collect()
	}
}

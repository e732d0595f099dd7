//! The structural vocabulary of the language: every sigil table and the kinds
//! they decode into.
//!
//! Glyphs here are part of the file format and must stay character-for-character
//! stable. Only the block and box tables are consumed by the parser today, the
//! remaining tables are published for the secondary grammars.

use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

/// Escapes the next scalar so that it loses any sigil meaning.
pub const ESCAPE_MARK: char = '\\';

/// The sigil that opens a block line.
pub const BLOCK_MARK: char = '~';

/// The sigil that opens a metadata line.
pub const META_MARK: char = ':';

/// The sigil that opens a table line.
pub const TABLE_MARK: char = '|';

/// Treated as whitespace when deciding whether a line is blank.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Indentation that turns a line into code.
pub const CODE_INDENT: &str = "    ";

/// Indentation that turns a line into box content.
pub const BOX_INDENT: &str = "  ";

/// The kind of block introduced by `~<sigil>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
	Attach,
	Box,
	Code,
	Heading1,
	Heading2,
	Heading3,
	Heading4,
	Heading5,
	Heading6,
	Image,
	Include,
	Line,
	Nested,
	OrderedList,
	PageBreak,
	Table,
	ThematicBreak,
	UnorderedList,
	Verbatim,
}

/// Block sigils in declaration order.
pub const BLOCK_SIGILS: [(char, BlockKind); 19] = [
	('^', BlockKind::Attach),
	('>', BlockKind::Box),
	('%', BlockKind::Code),
	('1', BlockKind::Heading1),
	('2', BlockKind::Heading2),
	('3', BlockKind::Heading3),
	('4', BlockKind::Heading4),
	('5', BlockKind::Heading5),
	('6', BlockKind::Heading6),
	('!', BlockKind::Image),
	('@', BlockKind::Include),
	('-', BlockKind::Line),
	('~', BlockKind::Nested),
	('#', BlockKind::OrderedList),
	('.', BlockKind::PageBreak),
	('|', BlockKind::Table),
	('+', BlockKind::ThematicBreak),
	('*', BlockKind::UnorderedList),
	('=', BlockKind::Verbatim),
];

impl BlockKind {
	pub const ALL: [BlockKind; 19] = [
		Self::Attach,
		Self::Box,
		Self::Code,
		Self::Heading1,
		Self::Heading2,
		Self::Heading3,
		Self::Heading4,
		Self::Heading5,
		Self::Heading6,
		Self::Image,
		Self::Include,
		Self::Line,
		Self::Nested,
		Self::OrderedList,
		Self::PageBreak,
		Self::Table,
		Self::ThematicBreak,
		Self::UnorderedList,
		Self::Verbatim,
	];

	pub fn from_sigil(sigil: char) -> Option<Self> {
		BLOCK_SIGILS
			.iter()
			.find(|(candidate, _)| *candidate == sigil)
			.map(|(_, kind)| *kind)
	}

	pub fn sigil(self) -> char {
		match self {
			Self::Attach => '^',
			Self::Box => '>',
			Self::Code => '%',
			Self::Heading1 => '1',
			Self::Heading2 => '2',
			Self::Heading3 => '3',
			Self::Heading4 => '4',
			Self::Heading5 => '5',
			Self::Heading6 => '6',
			Self::Image => '!',
			Self::Include => '@',
			Self::Line => '-',
			Self::Nested => '~',
			Self::OrderedList => '#',
			Self::PageBreak => '.',
			Self::Table => '|',
			Self::ThematicBreak => '+',
			Self::UnorderedList => '*',
			Self::Verbatim => '=',
		}
	}

	/// The name used to build `start<Name>` / `end<Name>` commands.
	pub fn name(self) -> &'static str {
		match self {
			Self::Attach => "Attach",
			Self::Box => "Box",
			Self::Code => "Code",
			Self::Heading1 => "Heading1",
			Self::Heading2 => "Heading2",
			Self::Heading3 => "Heading3",
			Self::Heading4 => "Heading4",
			Self::Heading5 => "Heading5",
			Self::Heading6 => "Heading6",
			Self::Image => "Image",
			Self::Include => "Include",
			Self::Line => "Line",
			Self::Nested => "Nested",
			Self::OrderedList => "OrderedList",
			Self::PageBreak => "PageBreak",
			Self::Table => "Table",
			Self::ThematicBreak => "ThematicBreak",
			Self::UnorderedList => "UnorderedList",
			Self::Verbatim => "Verbatim",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.name() == name)
	}

	/// Code and box blocks carry a sub-sigil directly after the block sigil, so
	/// they are exempt from the mandatory separating space.
	pub fn requires_whitespace(self) -> bool {
		!matches!(self, Self::Code | Self::Box)
	}

	pub fn heading_level(self) -> Option<u8> {
		match self {
			Self::Heading1 => Some(1),
			Self::Heading2 => Some(2),
			Self::Heading3 => Some(3),
			Self::Heading4 => Some(4),
			Self::Heading5 => Some(5),
			Self::Heading6 => Some(6),
			_ => None,
		}
	}
}

impl Display for BlockKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// The semantic flavour of a `~>` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoxKind {
	/// A plain box. No glyph selects it.
	Box,
	Abstract,
	Announcement,
	Bug,
	Construction,
	Discussion,
	Error,
	Example,
	Important,
	Info,
	Note,
	Poetry,
	Question,
	Quote,
	Success,
	Tip,
	Warning,
}

/// Box glyphs in declaration order. Several glyphs alias the same kind, and
/// some glyphs include the emoji presentation selector `U+FE0F`.
pub const BOX_SIGILS: [(&str, BoxKind); 25] = [
	("\u{1F4CB}", BoxKind::Abstract),
	("\u{1F4E2}", BoxKind::Announcement),
	("\u{1F41B}", BoxKind::Bug),
	("\u{1F6A7}", BoxKind::Construction),
	("\u{1F4AC}", BoxKind::Discussion),
	("\u{1F5E8}\u{FE0F}", BoxKind::Discussion),
	("\u{274C}", BoxKind::Error),
	("\u{2716}\u{FE0F}", BoxKind::Error),
	("\u{1F9EA}", BoxKind::Example),
	("\u{2755}", BoxKind::Important),
	("\u{2757}", BoxKind::Important),
	("\u{203C}\u{FE0F}", BoxKind::Important),
	("\u{2139}\u{FE0F}", BoxKind::Info),
	("\u{2139}", BoxKind::Info),
	("\u{270F}\u{FE0F}", BoxKind::Note),
	("\u{1F3AD}", BoxKind::Poetry),
	("\u{2753}", BoxKind::Question),
	("\u{2754}", BoxKind::Question),
	("\u{1F5E3}\u{FE0F}", BoxKind::Quote),
	("\u{2714}\u{FE0F}", BoxKind::Success),
	("\u{2611}\u{FE0F}", BoxKind::Success),
	("\u{2705}", BoxKind::Success),
	("\u{1F4A1}", BoxKind::Tip),
	("\u{26A0}\u{FE0F}", BoxKind::Warning),
	("\u{26A0}", BoxKind::Warning),
];

impl BoxKind {
	pub fn from_sigil(glyph: &str) -> Option<Self> {
		lookup(&BOX_SIGILS, glyph)
	}

	/// The command emitted after `startBox` for this flavour.
	pub fn name(self) -> &'static str {
		match self {
			Self::Box => "box",
			Self::Abstract => "abstract",
			Self::Announcement => "announcement",
			Self::Bug => "bug",
			Self::Construction => "construction",
			Self::Discussion => "discussion",
			Self::Error => "error",
			Self::Example => "example",
			Self::Important => "important",
			Self::Info => "info",
			Self::Note => "note",
			Self::Poetry => "poetry",
			Self::Question => "question",
			Self::Quote => "quote",
			Self::Success => "success",
			Self::Tip => "tip",
			Self::Warning => "warning",
		}
	}
}

impl Display for BoxKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Inline styles, grouped by the tier of their delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InlineKind {
	// Tier 0: unstyled.
	Text,

	// Tier 1.
	Bold,
	Italic,
	Underline,
	Maths,
	Monospace,
	SmallCaps,

	// Tier 2.
	Endnote,
	Footnote,
	Highlight,
	Link,
	PageRef,
	Reference,
	Strike,
	Subscript,
	Superscript,

	// Tier 3.
	Code,
	Comment,
	Insert,
	Delete,
}

pub const INLINE_TIER1_SIGILS: [(&str, InlineKind); 6] = [
	("*", InlineKind::Bold),
	("/", InlineKind::Italic),
	("_", InlineKind::Underline),
	("$", InlineKind::Maths),
	("=", InlineKind::Monospace),
	("^", InlineKind::SmallCaps),
];

pub const INLINE_TIER2_SIGILS: [(&str, InlineKind); 9] = [
	("\u{2935}", InlineKind::Endnote),
	("\u{2020}", InlineKind::Footnote),
	("!", InlineKind::Highlight),
	("\u{2197}", InlineKind::Link),
	("#", InlineKind::PageRef),
	("@", InlineKind::Reference),
	("-", InlineKind::Strike),
	("\u{2193}", InlineKind::Subscript),
	("\u{2191}", InlineKind::Superscript),
];

pub const INLINE_TIER3_SIGILS: [(&str, InlineKind); 4] = [
	("%", InlineKind::Code),
	("\u{1F4AC}", InlineKind::Comment),
	("\u{2795}", InlineKind::Insert),
	("\u{2796}", InlineKind::Delete),
];

impl InlineKind {
	/// Delimiter tier, `0` for plain text.
	pub fn tier(self) -> u8 {
		match self {
			Self::Text => 0,
			Self::Bold
			| Self::Italic
			| Self::Underline
			| Self::Maths
			| Self::Monospace
			| Self::SmallCaps => 1,
			Self::Endnote
			| Self::Footnote
			| Self::Highlight
			| Self::Link
			| Self::PageRef
			| Self::Reference
			| Self::Strike
			| Self::Subscript
			| Self::Superscript => 2,
			Self::Code | Self::Comment | Self::Insert | Self::Delete => 3,
		}
	}

	/// Look a delimiter up in the table of the given tier.
	pub fn from_sigil(tier: u8, glyph: &str) -> Option<Self> {
		match tier {
			1 => lookup(&INLINE_TIER1_SIGILS, glyph),
			2 => lookup(&INLINE_TIER2_SIGILS, glyph),
			3 => lookup(&INLINE_TIER3_SIGILS, glyph),
			_ => None,
		}
	}
}

/// Metadata directives introduced on `:` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetaKind {
	Title,
	Author,
	Date,
	Tags,
	Setting,
	Goal,
	Image,
	Comment,
	VariableGroup,
	Variable,
	BlockMeta,
}

pub const META_SIGILS: [(&str, MetaKind); 11] = [
	("\u{26A1}", MetaKind::Title),
	("\u{1F3F7}\u{FE0F}", MetaKind::Tags),
	("\u{1F4C5}", MetaKind::Date),
	("\u{1F58A}\u{FE0F}", MetaKind::Author),
	("\u{2699}\u{FE0F}", MetaKind::Setting),
	("\u{1F3AF}", MetaKind::Goal),
	("\u{1F527}", MetaKind::Variable),
	("\u{1F4E6}", MetaKind::VariableGroup),
	("\u{1F5BC}\u{FE0F}", MetaKind::Image),
	("\u{1F4AC}", MetaKind::Comment),
	("\u{1F194}", MetaKind::BlockMeta),
];

impl MetaKind {
	pub fn from_sigil(glyph: &str) -> Option<Self> {
		lookup(&META_SIGILS, glyph)
	}
}

/// Shape of the value carried by a variable directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetaVariableKind {
	Paragraph,
	Object,
	Array,
}

/// The attribute set by a block-meta directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockMetaKind {
	Id,
	Tag,
	Key,
}

/// Row flavours on `|` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableRowKind {
	HeaderRightAligned,
	HeaderLeftAligned,
	HeaderCenterAligned,
	/// A plain cell. No sigil selects it.
	Cell,
	Attach,
	Row,
}

pub const TABLE_ROW_SIGILS: [(&str, TableRowKind); 5] = [
	(">", TableRowKind::HeaderRightAligned),
	("<", TableRowKind::HeaderLeftAligned),
	("=", TableRowKind::HeaderCenterAligned),
	("-", TableRowKind::Row),
	("^", TableRowKind::Attach),
];

impl TableRowKind {
	pub fn from_sigil(glyph: &str) -> Option<Self> {
		lookup(&TABLE_ROW_SIGILS, glyph)
	}
}

fn lookup<T: Copy>(table: &[(&str, T)], glyph: &str) -> Option<T> {
	table
		.iter()
		.find(|(candidate, _)| *candidate == glyph)
		.map(|(_, kind)| *kind)
}

/// Join the sigils of a table for display in diagnostic messages.
pub(crate) fn join_sigils<S: Display, T>(table: &[(S, T)]) -> String {
	table
		.iter()
		.map(|(sigil, _)| sigil.to_string())
		.collect::<Vec<_>>()
		.join(",")
}

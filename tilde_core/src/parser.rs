use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use tracing::trace;

use crate::Diagnostic;
use crate::DiagnosticCode;
use crate::blocks;
use crate::cst::LineKind;
use crate::cst::SourceLine;
use crate::cst::Token;
use crate::cursor::ScalarCursor;
use crate::tokens::BLOCK_MARK;
use crate::tokens::BYTE_ORDER_MARK;
use crate::tokens::BOX_INDENT;
use crate::tokens::CODE_INDENT;
use crate::tokens::META_MARK;
use crate::tokens::TABLE_MARK;

/// Variables made available to a document, keyed by name.
pub type Variables = BTreeMap<String, serde_json::Value>;

/// Options for a single parse run.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
	/// Initial contents of the variable map.
	pub variables: Variables,
}

/// The result of parsing one document.
///
/// Holds one [`SourceLine`] per physical line of the input, in order, together
/// with every diagnostic raised along the way.
#[derive(Debug, Clone, Serialize)]
pub struct ParseState {
	cst: Vec<SourceLine>,
	diagnostics: Vec<Diagnostic>,
	lines: Vec<String>,
	variables: Variables,
}

impl ParseState {
	fn new(input: &str, options: &ParseOptions) -> Self {
		Self {
			cst: vec![],
			diagnostics: vec![],
			lines: split_lines(input),
			variables: options.variables.clone(),
		}
	}

	pub fn cst(&self) -> &[SourceLine] {
		&self.cst
	}

	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	/// The raw text of every physical line.
	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn variables(&self) -> &Variables {
		&self.variables
	}

	/// Returns true when no diagnostics were raised.
	pub fn is_ok(&self) -> bool {
		self.diagnostics.is_empty()
	}
}

/// The line currently being handled: its CST node, a cursor over its text, and
/// the diagnostic sink of the parse run.
pub struct LineContext<'a> {
	index: usize,
	/// Cursor positioned just after the line's classification prefix.
	pub cursor: ScalarCursor<'a>,
	line: &'a mut SourceLine,
	diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a> LineContext<'a> {
	pub fn new(
		index: usize,
		cursor: ScalarCursor<'a>,
		line: &'a mut SourceLine,
		diagnostics: &'a mut Vec<Diagnostic>,
	) -> Self {
		Self {
			index,
			cursor,
			line,
			diagnostics,
		}
	}

	/// 1-based line number, as reported in diagnostics.
	pub fn line_number(&self) -> usize {
		self.index + 1
	}

	pub fn kind(&self) -> LineKind {
		self.line.kind
	}

	pub fn push_token(&mut self, token: Token) {
		self.line.tokens.push(token);
	}

	pub fn command(&mut self, value: impl Into<String>) {
		self.push_token(Token::command(value));
	}

	pub fn text(&mut self, value: impl Into<String>) {
		self.push_token(Token::text(value));
	}

	/// Record an error at the current cursor position.
	pub fn error(&mut self, code: DiagnosticCode) {
		let diagnostic = Diagnostic::error(code, self.line_number(), self.cursor.position());
		debug!(
			line = diagnostic.start_line,
			character = diagnostic.start_character,
			code = %code,
			"syntax error"
		);
		self.diagnostics.push(diagnostic);
	}
}

/// Parse a document into its concrete syntax tree.
pub fn parse(input: impl AsRef<str>) -> ParseState {
	parse_with_options(input, &ParseOptions::default())
}

/// Parse a document, seeding the parse state from `options`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = input.as_ref().len()))]
pub fn parse_with_options(input: impl AsRef<str>, options: &ParseOptions) -> ParseState {
	let mut state = ParseState::new(input.as_ref(), options);
	let ParseState {
		cst,
		diagnostics,
		lines,
		..
	} = &mut state;

	for (index, text) in lines.iter().enumerate() {
		let mut cursor = ScalarCursor::new(text);
		let kind = classify_line(&mut cursor);
		trace!(line = index + 1, %kind, "classified line");

		cst.push(SourceLine::new(index, text.as_str(), kind));
		let mut context = LineContext::new(index, cursor, &mut cst[index], diagnostics);
		handle_line(&mut context);
	}

	debug!(
		lines = state.cst.len(),
		diagnostics = state.diagnostics.len(),
		"parsed document"
	);

	state
}

/// Split on `\n`, dropping a `\r` that precedes it. A trailing line ending
/// yields a trailing empty line.
pub fn split_lines(input: &str) -> Vec<String> {
	input
		.split('\n')
		.map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
		.collect()
}

/// Classify a line from its raw text, moving the cursor past the
/// classification prefix. Sigils take priority over indentation.
pub fn classify_line(cursor: &mut ScalarCursor<'_>) -> LineKind {
	let text = cursor.input();

	if is_blank(text) {
		return LineKind::BlankLine;
	}

	let sigil_kind = match cursor.current() {
		Some(BLOCK_MARK) => Some(LineKind::Block),
		Some(META_MARK) => Some(LineKind::Meta),
		Some(TABLE_MARK) => Some(LineKind::Table),
		_ => None,
	};

	if let Some(kind) = sigil_kind {
		cursor.next();
		return kind;
	}

	if text.starts_with(CODE_INDENT) {
		cursor.advance(CODE_INDENT.len());
		return LineKind::Code;
	}

	if text.starts_with(BOX_INDENT) {
		cursor.advance(BOX_INDENT.len());
		return LineKind::Box;
	}

	LineKind::Paragraph
}

/// Whitespace only. A byte order mark counts as whitespace.
fn is_blank(text: &str) -> bool {
	text.chars().all(|ch| ch.is_whitespace() || ch == BYTE_ORDER_MARK)
}

/// Classify raw line text.
pub fn classify(text: &str) -> LineKind {
	classify_line(&mut ScalarCursor::new(text))
}

fn handle_line(context: &mut LineContext<'_>) {
	match context.kind() {
		LineKind::Block => blocks::dispatch(context),
		LineKind::Meta => meta_line(context),
		LineKind::Table => table_line(context),
		LineKind::Code => code_line(context),
		LineKind::Box => box_line(context),
		LineKind::Paragraph => paragraph_line(context),
		LineKind::BlankLine => {}
	}
}

fn meta_line(context: &mut LineContext<'_>) {
	trace!(line = context.line_number(), "meta lines are not handled yet");
}

fn table_line(context: &mut LineContext<'_>) {
	trace!(line = context.line_number(), "table lines are not handled yet");
}

fn code_line(context: &mut LineContext<'_>) {
	trace!(line = context.line_number(), "code lines are not handled yet");
}

fn box_line(context: &mut LineContext<'_>) {
	trace!(line = context.line_number(), "box content lines are not handled yet");
}

fn paragraph_line(context: &mut LineContext<'_>) {
	trace!(line = context.line_number(), "paragraph lines are not handled yet");
}

//! Handlers for `~` block lines.
//!
//! [`dispatch`] decodes the block sigil and hands the line to the handler for
//! that kind. Each kind has its own function; kinds whose content is not
//! scanned yet have an empty handler so that scanning can be added without
//! touching the dispatch logic.
//!
//! Every handler stops at the first problem it finds, so a line carries at
//! most one diagnostic. Tokens emitted before the problem are kept.

use tracing::trace;

use crate::DiagnosticCode;
use crate::cst::Command;
use crate::parser::LineContext;
use crate::tokens::BlockKind;
use crate::tokens::BoxKind;

/// Emoji presentation selector. May trail a box glyph.
const EMOJI_PRESENTATION: char = '\u{FE0F}';

/// Decode the block sigil under the cursor and route the line to its handler.
pub fn dispatch(context: &mut LineContext<'_>) {
	let Some(sigil) = context.cursor.current() else {
		context.error(DiagnosticCode::MissingBlockType);
		return;
	};

	let Some(kind) = BlockKind::from_sigil(sigil) else {
		context.error(DiagnosticCode::InvalidBlockType);
		return;
	};

	context.cursor.next();

	if kind.requires_whitespace() && !context.cursor.eat_whitespace() {
		context.error(DiagnosticCode::MissingWhitespace);
		return;
	}

	trace!(line = context.line_number(), %kind, "dispatching block");

	match kind {
		BlockKind::Attach => attach(context),
		BlockKind::Box => box_block(context),
		BlockKind::Code => code(context),
		BlockKind::Heading1
		| BlockKind::Heading2
		| BlockKind::Heading3
		| BlockKind::Heading4
		| BlockKind::Heading5
		| BlockKind::Heading6 => heading(context, kind),
		BlockKind::Image => image(context),
		BlockKind::Include => include(context),
		BlockKind::Line => line(context),
		BlockKind::Nested => nested(context),
		BlockKind::OrderedList => ordered_list(context),
		BlockKind::PageBreak => page_break(context),
		BlockKind::Table => table(context),
		BlockKind::ThematicBreak => thematic_break(context),
		BlockKind::UnorderedList => unordered_list(context),
		BlockKind::Verbatim => verbatim(context),
	}
}

/// `~1 Title` through `~6 Title`. The rest of the line, untrimmed, is the
/// heading text.
pub fn heading(context: &mut LineContext<'_>, kind: BlockKind) {
	context.command(Command::Start(kind).to_string());

	let text = context.cursor.eat_until_end();
	if text.is_empty() {
		context.error(DiagnosticCode::MissingHeadingText);
		return;
	}

	context.text(text);
	context.command(Command::End(kind).to_string());
}

/// `~><glyph>`: a box whose flavour is picked by the glyph right after the
/// sigil. Unknown glyphs are consumed without emitting anything.
pub fn box_block(context: &mut LineContext<'_>) {
	context.command(Command::Start(BlockKind::Box).to_string());

	let Some(sigil) = context.cursor.current() else {
		context.error(DiagnosticCode::MissingBoxTypeOrTitle);
		return;
	};

	let input = context.cursor.input();
	let start = context.cursor.byte_offset();
	let bare = &input[start..start + sigil.len_utf8()];

	context.cursor.next();
	if context.cursor.current() == Some(EMOJI_PRESENTATION) {
		context.cursor.next();
	}

	let glyph = &input[start..context.cursor.byte_offset()];
	match BoxKind::from_sigil(glyph).or_else(|| BoxKind::from_sigil(bare)) {
		Some(box_kind) => context.command(box_kind.name()),
		None => trace!(line = context.line_number(), glyph, "unrecognised box type"),
	}
}

pub fn attach(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::Attach);
}

pub fn code(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::Code);
}

pub fn image(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::Image);
}

pub fn include(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::Include);
}

pub fn line(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::Line);
}

pub fn nested(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::Nested);
}

pub fn ordered_list(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::OrderedList);
}

pub fn page_break(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::PageBreak);
}

pub fn table(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::Table);
}

pub fn thematic_break(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::ThematicBreak);
}

pub fn unordered_list(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::UnorderedList);
}

pub fn verbatim(context: &mut LineContext<'_>) {
	not_yet_scanned(context, BlockKind::Verbatim);
}

fn not_yet_scanned(context: &LineContext<'_>, kind: BlockKind) {
	trace!(line = context.line_number(), %kind, "block content is not scanned yet");
}

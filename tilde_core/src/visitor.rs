//! Rendering a parsed document by walking its tokens.
//!
//! A [`Visitor`] receives every token of every line in document order and
//! returns the output for it. [`render`] concatenates those outputs. The
//! parser never calls a visitor itself.

use crate::cst::Command;
use crate::cst::SourceLine;
use crate::cst::Token;
use crate::cst::TokenKind;
use crate::parser::ParseState;
use crate::tokens::BlockKind;

pub trait Visitor {
	/// Called for a `start<Kind>` command.
	fn start(&mut self, kind: BlockKind, token: &Token, line: &SourceLine, state: &ParseState)
	-> String;

	/// Called for an `end<Kind>` command.
	fn end(&mut self, kind: BlockKind, token: &Token, line: &SourceLine, state: &ParseState)
	-> String;

	/// Called for a command that does not name a block, such as the box
	/// flavour emitted after `startBox`.
	fn command(&mut self, _token: &Token, _line: &SourceLine, _state: &ParseState) -> String {
		String::new()
	}

	fn text(&mut self, token: &Token, _line: &SourceLine, _state: &ParseState) -> String {
		token.value.clone()
	}

	fn property(&mut self, _token: &Token, _line: &SourceLine, _state: &ParseState) -> String {
		String::new()
	}
}

/// Walk every token of `state` in order and join what `visitor` returns.
pub fn render(state: &ParseState, visitor: &mut impl Visitor) -> String {
	let mut output = String::new();

	for line in state.cst() {
		for token in &line.tokens {
			let rendered = match token.kind {
				TokenKind::Command => {
					match token.as_command() {
						Some(Command::Start(kind)) => visitor.start(kind, token, line, state),
						Some(Command::End(kind)) => visitor.end(kind, token, line, state),
						None => visitor.command(token, line, state),
					}
				}
				TokenKind::Text => visitor.text(token, line, state),
				TokenKind::Property => visitor.property(token, line, state),
			};

			output.push_str(&rendered);
		}
	}

	output
}

//! Single-lookahead validation of token sequences.
//!
//! A [`Grammar`] lists the token types a sequence may start and end with, and
//! for every type the types allowed to come straight after it. That is enough
//! for flat, line-sized syntax; it cannot express nesting or counting.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::TildeError;
use crate::TildeResult;
use crate::lexer::PatternSet;
use crate::lexer::PatternToken;
use crate::lexer::TokenStream;

/// Start, follow and end sets for a token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
	/// Types the first token may have.
	#[serde(default)]
	pub start: Vec<String>,
	/// Types the last token may have.
	#[serde(default)]
	pub end: Vec<String>,
	/// For each type, the types that may follow it. A missing entry means
	/// nothing may follow.
	#[serde(default)]
	pub follow: BTreeMap<String, Vec<String>>,
	/// Display names used in error messages instead of the raw type names.
	#[serde(default)]
	pub title: BTreeMap<String, String>,
}

impl Grammar {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_start<I: IntoIterator<Item = S>, S: Into<String>>(mut self, kinds: I) -> Self {
		self.start = kinds.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_end<I: IntoIterator<Item = S>, S: Into<String>>(mut self, kinds: I) -> Self {
		self.end = kinds.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_follow<I: IntoIterator<Item = S>, S: Into<String>>(
		mut self,
		kind: impl Into<String>,
		kinds: I,
	) -> Self {
		self.follow
			.insert(kind.into(), kinds.into_iter().map(Into::into).collect());
		self
	}

	#[must_use]
	pub fn with_title(mut self, kind: impl Into<String>, title: impl Into<String>) -> Self {
		self.title.insert(kind.into(), title.into());
		self
	}

	/// The types allowed after `kind`.
	pub fn follow_set(&self, kind: &str) -> &[String] {
		self.follow.get(kind).map(Vec::as_slice).unwrap_or_default()
	}

	/// The display name of a type.
	pub fn title_of<'a>(&'a self, kind: &'a str) -> &'a str {
		self.title.get(kind).map_or(kind, String::as_str)
	}

	/// Check `tokens` against this grammar, failing on the first token that
	/// breaks it.
	pub fn validate(&self, tokens: &[PatternToken]) -> TildeResult<()> {
		let Some((first, rest)) = tokens.split_first() else {
			return Err(TildeError::EmptyTokenSequence {
				message: format!("Unexpected end of input, {}", self.expecting(&self.start)),
			});
		};

		if !self.start.contains(&first.kind) {
			return Err(self.unexpected(first, &self.start));
		}

		let mut previous = first;
		for token in rest {
			let allowed = self.follow_set(&previous.kind);
			if !allowed.iter().any(|kind| *kind == token.kind) {
				return Err(self.unexpected(token, allowed));
			}

			previous = token;
		}

		if !self.end.contains(&previous.kind) {
			return Err(self.unexpected(previous, self.follow_set(&previous.kind)));
		}

		Ok(())
	}

	fn unexpected(&self, token: &PatternToken, allowed: &[String]) -> TildeError {
		TildeError::InvalidTokenSequence {
			message: format!("Unexpected token, {}", self.expecting(allowed)),
			offset: token.offset,
		}
	}

	fn expecting(&self, allowed: &[String]) -> String {
		if allowed.is_empty() {
			return "was expecting nothing more".to_string();
		}

		let titles = allowed
			.iter()
			.map(|kind| format!("'{}'", self.title_of(kind)))
			.collect::<Vec<_>>()
			.join(", ");

		format!("was expecting {titles}")
	}
}

/// Check `tokens` against `grammar`.
pub fn validate(tokens: &[PatternToken], grammar: &Grammar) -> TildeResult<()> {
	grammar.validate(tokens)
}

impl TokenStream {
	pub fn validate(&self, grammar: &Grammar) -> TildeResult<()> {
		grammar.validate(self)
	}
}

/// A pattern set paired with the grammar its token streams must satisfy.
#[derive(Debug, Clone)]
pub struct CompiledGrammar {
	pub patterns: Arc<PatternSet>,
	pub grammar: Grammar,
}

impl CompiledGrammar {
	pub fn new(patterns: impl Into<Arc<PatternSet>>, grammar: Grammar) -> Self {
		Self {
			patterns: patterns.into(),
			grammar,
		}
	}

	pub fn id(&self) -> &str {
		self.patterns.id()
	}

	/// Tokenize `input` and validate the result.
	pub fn parse(&self, input: &str) -> TildeResult<TokenStream> {
		let tokens = self.patterns.tokenize(input);
		self.grammar.validate(&tokens)?;

		Ok(tokens)
	}
}

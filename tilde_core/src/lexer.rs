//! A general purpose tokenizer driven by a set of named regular expressions.
//!
//! All patterns of a [`PatternSet`] are joined into one alternation and matched
//! anchored at the current offset, so the earliest declared pattern wins when
//! several could match. Matches of the pattern named [`IGNORE`] are skipped.
//! When nothing matches, a single [`ERROR`] token covering the rest of the input
//! ends the stream.

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

use derive_more::Deref;
use derive_more::DerefMut;
use regex_automata::Anchored;
use regex_automata::Input;
use regex_automata::Span;
use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::trace;

use crate::TildeError;
use crate::TildeResult;

/// Matches under this name are consumed without producing a token.
pub const IGNORE: &str = "ignore";

/// Type of the terminal token emitted when no pattern matches.
pub const ERROR: &str = "error";

/// Flags applied to every compiled set: `^`/`$` match at line boundaries and
/// matching ignores case.
const FLAGS: &str = "(?mi)";

/// A token produced by [`PatternSet::tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternToken {
	/// The name of the pattern that matched, or [`ERROR`].
	#[serde(rename = "type")]
	pub kind: String,
	/// The matched text.
	pub value: String,
	/// Byte offset of the match in the input.
	pub offset: usize,
}

impl PatternToken {
	pub fn new(kind: impl Into<String>, value: impl Into<String>, offset: usize) -> Self {
		Self {
			kind: kind.into(),
			value: value.into(),
			offset,
		}
	}

	pub fn is_error(&self) -> bool {
		self.kind == ERROR
	}
}

/// The tokens of one input, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut, Serialize)]
pub struct TokenStream(
	#[deref]
	#[deref_mut]
	Vec<PatternToken>,
);

impl TokenStream {
	/// The token types, in order.
	pub fn kinds(&self) -> Vec<&str> {
		self.iter().map(|token| token.kind.as_str()).collect()
	}

	/// Whether scanning stopped on input that no pattern matched.
	pub fn has_error(&self) -> bool {
		self.last().is_some_and(PatternToken::is_error)
	}

	pub fn into_inner(self) -> Vec<PatternToken> {
		self.0
	}
}

impl From<Vec<PatternToken>> for TokenStream {
	fn from(tokens: Vec<PatternToken>) -> Self {
		Self(tokens)
	}
}

/// An ordered, precompiled set of named patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
	id: String,
	/// Token type names in declaration order.
	names: Vec<String>,
	/// Capture group name for each entry of `names`.
	groups: Vec<String>,
	/// Each pattern compiled on its own, in the same order as `names`.
	singles: Vec<Regex>,
	regex: Regex,
}

impl PatternSet {
	/// Compile `patterns` in the given order. `id` names the set in errors and
	/// in [`PatternCache`].
	pub fn new<I, N, P>(id: impl Into<String>, patterns: I) -> TildeResult<Self>
	where
		I: IntoIterator<Item = (N, P)>,
		N: Into<String>,
		P: AsRef<str>,
	{
		let id = id.into();
		let mut names = vec![];
		let mut groups = vec![];
		let mut singles = vec![];
		let mut seen = HashSet::new();
		let mut alternatives = vec![];

		for (index, (name, pattern)) in patterns.into_iter().enumerate() {
			let name: String = name.into();
			let pattern = pattern.as_ref();

			if !seen.insert(name.clone()) {
				return Err(TildeError::DuplicatePattern(name));
			}

			let single = Regex::new(&format!("{FLAGS}{pattern}")).map_err(|e| {
				TildeError::InvalidPattern {
					name: name.clone(),
					reason: e.to_string(),
				}
			})?;

			let group = format!("t{index}");
			singles.push(single);
			alternatives.push(format!("(?P<{group}>{pattern})"));
			groups.push(group);
			names.push(name);
		}

		if names.is_empty() {
			return Err(TildeError::EmptyPatternSet(id));
		}

		let source = format!("{FLAGS}{}", alternatives.join("|"));
		let regex = Regex::new(&source).map_err(|e| {
			TildeError::InvalidPattern {
				name: id.clone(),
				reason: e.to_string(),
			}
		})?;

		debug!(id = %id, patterns = names.len(), "compiled pattern set");

		Ok(Self {
			id,
			names,
			groups,
			singles,
			regex,
		})
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// Token type names in declaration order.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Slice `input` into tokens.
	///
	/// A pattern that matches the empty string makes no progress, so it is
	/// treated as not matching and the next declared pattern gets its turn.
	pub fn tokenize(&self, input: &str) -> TokenStream {
		let mut tokens = vec![];
		let mut captures = self.regex.create_captures();
		let mut offset = 0;

		while offset < input.len() {
			let Some((name, span)) = self.match_at(input, offset, &mut captures) else {
				tokens.push(PatternToken::new(ERROR, &input[offset..], offset));
				break;
			};

			if name != IGNORE {
				tokens.push(PatternToken::new(name, &input[span.range()], offset));
			}

			offset = span.end;
		}

		TokenStream(tokens)
	}

	/// The first declared pattern with a non-empty match anchored at `offset`.
	fn match_at(&self, input: &str, offset: usize, captures: &mut Captures) -> Option<(&str, Span)> {
		let search = Input::new(input).range(offset..).anchored(Anchored::Yes);
		self.regex.search_captures(&search, captures);

		let (name, span) = self
			.groups
			.iter()
			.zip(&self.names)
			.find_map(|(group, name)| captures.get_group_by_name(group).map(|span| (name, span)))?;

		if !span.is_empty() {
			return Some((name.as_str(), span));
		}

		// A zero-width alternative shadows every later one in the alternation.
		trace!(id = %self.id, pattern = %name, offset, "skipping empty match");
		self.names
			.iter()
			.zip(&self.singles)
			.find_map(|(name, single)| {
				single
					.search(&search)
					.filter(|found| !found.is_empty())
					.map(|found| (name.as_str(), found.span()))
			})
	}
}

/// Slice `input` into tokens using a precompiled pattern set.
pub fn tokenize(input: &str, patterns: &PatternSet) -> TokenStream {
	patterns.tokenize(input)
}

/// Compiled pattern sets keyed by their id.
///
/// Reusing an id returns the set compiled the first time, whatever patterns
/// are passed later.
#[derive(Debug, Default)]
pub struct PatternCache {
	compiled: Mutex<HashMap<String, Arc<PatternSet>>>,
}

impl PatternCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// The process-wide cache.
	pub fn global() -> &'static PatternCache {
		static CACHE: OnceLock<PatternCache> = OnceLock::new();
		CACHE.get_or_init(PatternCache::new)
	}

	/// Return the set cached under `id`, compiling `patterns` on a miss.
	pub fn get_or_compile<I, N, P>(&self, id: &str, patterns: I) -> TildeResult<Arc<PatternSet>>
	where
		I: IntoIterator<Item = (N, P)>,
		N: Into<String>,
		P: AsRef<str>,
	{
		let mut compiled = self.compiled.lock().unwrap_or_else(PoisonError::into_inner);

		if let Some(set) = compiled.get(id) {
			return Ok(Arc::clone(set));
		}

		debug!(id, "pattern cache miss");
		let set = Arc::new(PatternSet::new(id, patterns)?);
		compiled.insert(id.to_string(), Arc::clone(&set));

		Ok(set)
	}

	pub fn get(&self, id: &str) -> Option<Arc<PatternSet>> {
		self.compiled
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.get(id)
			.cloned()
	}

	/// Cache an already compiled set, replacing any set with the same id.
	pub fn insert(&self, set: PatternSet) -> Arc<PatternSet> {
		let set = Arc::new(set);
		self.compiled
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.insert(set.id().to_string(), Arc::clone(&set));

		set
	}

	pub fn len(&self) -> usize {
		self.compiled
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

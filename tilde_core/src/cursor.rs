/// A cursor over the Unicode scalar values of a single line.
///
/// Positions are scalar indices, not byte offsets or UTF-16 code units. An
/// emoji built from several code points (for example one carrying a variation
/// selector) still takes several steps to cross.
///
/// The cursor starts on the first scalar. Once it steps past the last one,
/// [`current`](Self::current) returns `None` and
/// [`position`](Self::position) equals the scalar count.
#[derive(Debug, Clone)]
pub struct ScalarCursor<'a> {
	/// The untouched line text.
	input: &'a str,
	/// Byte offset and value of every scalar in `input`.
	scalars: Vec<(usize, char)>,
	/// Index into `scalars`.
	position: usize,
}

impl<'a> ScalarCursor<'a> {
	pub fn new(input: &'a str) -> Self {
		Self {
			input,
			scalars: input.char_indices().collect(),
			position: 0,
		}
	}

	/// The text this cursor walks.
	pub fn input(&self) -> &'a str {
		self.input
	}

	/// The current scalar index.
	pub fn position(&self) -> usize {
		self.position
	}

	/// The scalar under the cursor, or `None` once the end has been reached.
	pub fn current(&self) -> Option<char> {
		self.scalars.get(self.position).map(|(_, ch)| *ch)
	}

	/// Number of scalars in the line.
	pub fn len(&self) -> usize {
		self.scalars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scalars.is_empty()
	}

	/// Step to the next scalar and return it. Stepping off the last scalar
	/// parks the cursor at the end and returns `None`.
	#[allow(clippy::should_implement_trait)]
	pub fn next(&mut self) -> Option<char> {
		if self.has_next() {
			self.position += 1;
		} else {
			self.position = self.scalars.len();
		}

		self.current()
	}

	/// Move back to the first scalar.
	pub fn reset(&mut self) {
		self.position = 0;
	}

	/// Whether another scalar follows the current one.
	pub fn has_next(&self) -> bool {
		self.position + 1 < self.scalars.len()
	}

	/// Step forward up to `count` times. Never moves past the last scalar.
	pub fn advance(&mut self, count: usize) {
		for _ in 0..count {
			if !self.has_next() {
				break;
			}

			self.next();
		}
	}

	/// Only a single ASCII space counts, tabs and other Unicode whitespace do
	/// not.
	pub fn is_whitespace(&self) -> bool {
		self.current() == Some(' ')
	}

	/// Consume one space. Returns `false` and leaves the cursor untouched when
	/// the current scalar is anything else.
	pub fn eat_whitespace(&mut self) -> bool {
		if self.is_whitespace() {
			self.next();
			return true;
		}

		false
	}

	/// Consume a run of spaces.
	pub fn eat_whitespaces(&mut self) {
		while self.eat_whitespace() {}
	}

	/// Consume a maximal run of ASCII digits and parse it.
	///
	/// Returns `None` when the cursor is not on a digit, in which case nothing
	/// is consumed, or when the digits overflow a `u64`, in which case the run
	/// is still consumed.
	pub fn eat_number(&mut self) -> Option<u64> {
		let start = self.byte_offset();

		while self.current().is_some_and(|ch| ch.is_ascii_digit()) {
			self.next();
		}

		let digits = &self.input[start..self.byte_offset()];
		if digits.is_empty() {
			return None;
		}

		digits.parse().ok()
	}

	/// Consume scalars up to, but not including, the first `sentinel` (or the
	/// end of the line) and return them.
	pub fn eat_until(&mut self, sentinel: char) -> String {
		let start = self.byte_offset();

		while self.current().is_some_and(|ch| ch != sentinel) {
			self.next();
		}

		self.input[start..self.byte_offset()].to_string()
	}

	/// Consume the rest of the line and return it exactly as it appears in the
	/// source.
	pub fn eat_until_end(&mut self) -> &'a str {
		let rest = &self.input[self.byte_offset()..];
		self.position = self.scalars.len();
		rest
	}

	/// The raw text from the current position to the end of the line, without
	/// consuming it.
	pub fn rest(&self) -> &'a str {
		&self.input[self.byte_offset()..]
	}

	/// Byte offset of the current scalar within the line.
	pub fn byte_offset(&self) -> usize {
		self.scalars
			.get(self.position)
			.map_or(self.input.len(), |(offset, _)| *offset)
	}
}

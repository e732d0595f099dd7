use crate::Grammar;
use crate::PatternSet;
use crate::PatternToken;

/// Patterns for `10 - 20` style ranges.
pub const RANGE_PATTERNS: [(&str, &str); 3] =
	[("number", "[0-9]+"), ("dash", "-"), ("ignore", " +")];

pub const RANGE_CONFIG: &str = r#"
[variables]
author = "Ada"
draft = true
count = 3
ratio = 0.5
tags = ["one", "two"]

[variables.owner]
name = "Grace"

[grammars.range]
patterns = [
  { name = "number", pattern = "[0-9]+" },
  { name = "dash", pattern = "-" },
  { name = "ignore", pattern = " +" },
]
start = ["number"]
end = ["number"]

[grammars.range.follow]
number = ["dash"]
dash = ["number"]

[grammars.range.title]
dash = "-"
"#;

pub fn range_patterns() -> PatternSet {
	PatternSet::new("range", RANGE_PATTERNS).unwrap_or_else(|e| panic!("range patterns: {e}"))
}

pub fn range_grammar() -> Grammar {
	Grammar::new()
		.with_start(["number"])
		.with_end(["number"])
		.with_follow("number", ["dash"])
		.with_follow("dash", ["number"])
		.with_title("dash", "-")
}

pub fn token(kind: &str, value: &str, offset: usize) -> PatternToken {
	PatternToken::new(kind, value, offset)
}

pub const SAMPLE_DOCUMENT: &str = "~1 Getting started\n\nSome text.\n~>\u{1F4A1} Tip\n  Inside the \
                                   box\n    let code = 1;\n:title\n|cell|\n~x\n~2 Next";

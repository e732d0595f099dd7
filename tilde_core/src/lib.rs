//! `tilde_core` is the front end for the tilde markup language. It turns a
//! document into a concrete syntax tree of classified lines, each carrying its
//! own token stream, and collects syntax diagnostics along the way instead of
//! failing.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Document text
//!   -> Line splitter (one node per physical line)
//!   -> Classifier (block, meta, table, code, box, paragraph, blank)
//!   -> Block dispatcher (decodes `~<sigil>`, routes to a handler)
//!   -> Handlers (emit command/text tokens or a diagnostic)
//! ```
//!
//! Secondary, line-sized grammars are handled by a separate regex driven
//! tokenizer ([`PatternSet`]) and a single-lookahead validator ([`Grammar`]).
//!
//! ## Modules
//!
//! - [`cursor`]: A cursor over the Unicode scalars of one line.
//! - [`tokens`]: Sigil tables for blocks, boxes, inline styles, metadata and
//!   table rows.
//! - [`blocks`]: Handlers for `~` block lines.
//! - [`lexer`]: The named-pattern tokenizer and its compiled set cache.
//! - [`patterns`]: Token sequence validation.
//! - [`config`]: Loading grammars and variables from `tilde.toml`.
//! - [`visitor`]: Rendering a parsed document through a visitor.
//!
//! ## Quick Start
//!
//! ```rust
//! use tilde_core::BlockKind;
//! use tilde_core::LineKind;
//! use tilde_core::parse;
//!
//! let state = parse("~1 Hello\nworld");
//!
//! assert!(state.is_ok());
//! assert_eq!(state.cst()[0].kind, LineKind::Block);
//! assert_eq!(state.cst()[0].token_values(), ["startHeading1", "Hello", "endHeading1"]);
//! assert_eq!(state.cst()[1].kind, LineKind::Paragraph);
//! assert_eq!(BlockKind::from_sigil('1'), Some(BlockKind::Heading1));
//! ```

pub use config::*;
pub use cst::*;
pub use cursor::*;
pub use diagnostics::*;
pub use error::*;
pub use lexer::*;
pub use parser::*;
pub use patterns::*;
pub use tokens::*;
pub use visitor::*;

pub mod blocks;
pub mod config;
mod cst;
pub mod cursor;
mod diagnostics;
#[allow(unused_assignments)]
mod error;
pub mod lexer;
mod parser;
pub mod patterns;
pub mod tokens;
pub mod visitor;

#[cfg(test)]
mod __fixtures;

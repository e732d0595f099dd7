use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::TildeError;
use crate::TildeResult;
use crate::lexer::PatternCache;
use crate::lexer::PatternSet;
use crate::parser::ParseOptions;
use crate::parser::Variables;
use crate::patterns::CompiledGrammar;
use crate::patterns::Grammar;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["tilde.toml", ".tilde.toml", ".config/tilde.toml"];

/// Configuration loaded from a `tilde.toml` file.
///
/// ```toml
/// [variables]
/// author = "Ada"
/// draft = true
///
/// [grammars.range]
/// patterns = [
///   { name = "number", pattern = "[0-9]+" },
///   { name = "dash", pattern = "-" },
///   { name = "ignore", pattern = " +" },
/// ]
/// start = ["number"]
/// end = ["number"]
///
/// [grammars.range.follow]
/// number = ["dash"]
/// dash = ["number"]
///
/// [grammars.range.title]
/// dash = "-"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TildeConfig {
	/// Secondary grammars keyed by id.
	#[serde(default)]
	pub grammars: BTreeMap<String, GrammarConfig>,
	/// Initial document variables.
	#[serde(default)]
	pub variables: BTreeMap<String, toml::Value>,
}

/// One `[grammars.<id>]` table.
///
/// `patterns` is an array so that declaration order, which decides which
/// pattern wins on a tie, survives deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct GrammarConfig {
	pub patterns: Vec<PatternConfig>,
	#[serde(default)]
	pub start: Vec<String>,
	#[serde(default)]
	pub end: Vec<String>,
	#[serde(default)]
	pub follow: BTreeMap<String, Vec<String>>,
	#[serde(default)]
	pub title: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
	pub name: String,
	pub pattern: String,
}

impl TildeConfig {
	/// The first config file that exists under `root`, in
	/// [`CONFIG_FILE_CANDIDATES`] order.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.into_iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Discover and read the config under `root`. A project without a config
	/// file yields `None`.
	pub fn load(root: &Path) -> TildeResult<Option<TildeConfig>> {
		Self::resolve_path(root)
			.map(|path| Self::from_path(&path))
			.transpose()
	}

	pub fn from_path(path: &Path) -> TildeResult<TildeConfig> {
		let config = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
		tracing::debug!(
			path = %path.display(),
			grammars = config.grammars.len(),
			variables = config.variables.len(),
			"loaded config"
		);

		Ok(config)
	}

	pub fn from_toml_str(content: &str) -> TildeResult<TildeConfig> {
		toml::from_str(content).map_err(|e| TildeError::ConfigParse(e.to_string()))
	}

	/// Compile the grammar declared under `id`.
	pub fn grammar(&self, id: &str) -> TildeResult<CompiledGrammar> {
		self.grammars
			.get(id)
			.ok_or_else(|| TildeError::UnknownGrammar(id.to_string()))?
			.compile(id)
	}

	/// Compile every declared grammar, reusing sets already held by `cache`.
	pub fn compile_grammars(
		&self,
		cache: &PatternCache,
	) -> TildeResult<BTreeMap<String, CompiledGrammar>> {
		self.grammars
			.iter()
			.map(|(id, config)| Ok((id.clone(), config.compile_cached(id, cache)?)))
			.collect()
	}

	/// Parse options seeded with the configured variables.
	pub fn parse_options(&self) -> TildeResult<ParseOptions> {
		let variables = self
			.variables
			.iter()
			.map(|(name, value)| Ok((name.clone(), variable_value(name, value)?)))
			.collect::<TildeResult<Variables>>()?;

		Ok(ParseOptions { variables })
	}
}

impl GrammarConfig {
	/// The start, follow and end sets of this grammar.
	pub fn grammar(&self) -> Grammar {
		Grammar {
			start: self.start.clone(),
			end: self.end.clone(),
			follow: self.follow.clone(),
			title: self.title.clone(),
		}
	}

	fn pattern_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.patterns
			.iter()
			.map(|entry| (entry.name.as_str(), entry.pattern.as_str()))
	}

	pub fn compile(&self, id: &str) -> TildeResult<CompiledGrammar> {
		let patterns = PatternSet::new(id, self.pattern_pairs())?;
		Ok(CompiledGrammar::new(patterns, self.grammar()))
	}

	pub fn compile_cached(&self, id: &str, cache: &PatternCache) -> TildeResult<CompiledGrammar> {
		let patterns = cache.get_or_compile(id, self.pattern_pairs())?;
		Ok(CompiledGrammar::new(patterns, self.grammar()))
	}
}

/// The variable value for a TOML value. `path` is the dotted location of
/// `value` under `[variables]`, used in errors.
fn variable_value(path: &str, value: &toml::Value) -> TildeResult<serde_json::Value> {
	let invalid = |reason: String| {
		TildeError::InvalidVariable {
			path: path.to_string(),
			reason,
		}
	};

	Ok(match value {
		toml::Value::String(text) => serde_json::Value::from(text.as_str()),
		toml::Value::Boolean(flag) => serde_json::Value::Bool(*flag),
		toml::Value::Integer(number) => serde_json::Value::Number((*number).into()),
		toml::Value::Float(number) => {
			serde_json::Number::from_f64(*number)
				.map(serde_json::Value::Number)
				.ok_or_else(|| invalid(format!("{number} is not a finite number")))?
		}
		toml::Value::Datetime(datetime) => serde_json::Value::String(datetime.to_string()),
		toml::Value::Array(items) => {
			items
				.iter()
				.enumerate()
				.map(|(index, item)| variable_value(&format!("{path}[{index}]"), item))
				.collect::<TildeResult<Vec<_>>>()?
				.into()
		}
		toml::Value::Table(table) => {
			table
				.iter()
				.map(|(key, item)| Ok((key.clone(), variable_value(&format!("{path}.{key}"), item)?)))
				.collect::<TildeResult<serde_json::Map<_, _>>>()?
				.into()
		}
	})
}

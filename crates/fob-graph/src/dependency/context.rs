use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{HasRange, HasRequest, ProducesWarnings};
use crate::memory::ModuleGraph;
use crate::span::SourceRange;
use crate::warning::DependencyWarning;

const GLOBAL_OR_STICKY_WARNING: &str = "Contexts can't use RegExps with the 'g' or 'y' flags.";

/// A JavaScript regular expression literal captured by the parser.
///
/// Only the textual form is kept; matching happens in the context module
/// factory, which is not part of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextRegExp {
    pub source: String,
    #[serde(default)]
    pub flags: String,
}

impl ContextRegExp {
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: flags.into(),
        }
    }

    pub fn is_global(&self) -> bool {
        self.flags.contains('g')
    }

    pub fn is_sticky(&self) -> bool {
        self.flags.contains('y')
    }
}

impl fmt::Display for ContextRegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// How the modules matched by a context are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextMode {
    #[default]
    Sync,
    Eager,
    Weak,
    Lazy,
    LazyOnce,
    AsyncWeak,
}

impl ContextMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Eager => "eager",
            Self::Weak => "weak",
            Self::Lazy => "lazy",
            Self::LazyOnce => "lazy-once",
            Self::AsyncWeak => "async-weak",
        }
    }
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options describing a folder/glob-style context request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContextOptions {
    pub request: String,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub reg_exp: Option<ContextRegExp>,
    #[serde(default)]
    pub include: Option<ContextRegExp>,
    #[serde(default)]
    pub exclude: Option<ContextRegExp>,
    #[serde(default)]
    pub mode: ContextMode,
    #[serde(default)]
    pub chunk_name: Option<String>,
    #[serde(default)]
    pub group_options: Option<Value>,
}

/// Discard patterns that are unsafe to reuse across several matches.
///
/// A `g` or `y` flag makes a JavaScript RegExp stateful (`lastIndex`), so the
/// pattern is dropped and the returned flag records that this happened.
pub fn validate_reg_exp(reg_exp: Option<ContextRegExp>) -> (Option<ContextRegExp>, bool) {
    match reg_exp {
        Some(pattern) if pattern.is_global() || pattern.is_sticky() => (None, true),
        other => (other, false),
    }
}

/// Dependency on every module matching a directory + pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawContextDependency", into = "RawContextDependency")]
pub struct ContextDependency {
    options: ContextOptions,
    user_request: String,
    critical: Option<String>,
    had_global_or_sticky_reg_exp: bool,
    range: Option<SourceRange>,
    value_range: Option<SourceRange>,
}

impl ContextDependency {
    /// Build a context dependency, validating its pattern.
    pub fn new(options: ContextOptions) -> Self {
        let (reg_exp, had_global_or_sticky_reg_exp) = validate_reg_exp(options.reg_exp.clone());
        let user_request = options.request.clone();

        Self {
            options: ContextOptions { reg_exp, ..options },
            user_request,
            critical: None,
            had_global_or_sticky_reg_exp,
            range: None,
            value_range: None,
        }
    }

    pub fn with_critical(mut self, message: impl Into<String>) -> Self {
        self.critical = Some(message.into());
        self
    }

    pub fn with_range(mut self, range: SourceRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_value_range(mut self, range: SourceRange) -> Self {
        self.value_range = Some(range);
        self
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    pub fn user_request(&self) -> &str {
        &self.user_request
    }

    pub fn critical(&self) -> Option<&str> {
        self.critical.as_deref()
    }

    pub fn had_global_or_sticky_reg_exp(&self) -> bool {
        self.had_global_or_sticky_reg_exp
    }

    pub fn value_range(&self) -> Option<SourceRange> {
        self.value_range
    }

    /// Critical contexts, including ones that lost an unsafe pattern.
    pub fn is_critical(&self) -> bool {
        self.critical.is_some() || self.had_global_or_sticky_reg_exp
    }

    /// Identifier shared by context dependencies that can be merged.
    ///
    /// Absent chunk names and group options render as `undefined`, matching
    /// the identifiers emitted by existing tooling.
    pub fn resource_identifier(&self) -> String {
        let options = &self.options;
        let chunk_name = options.chunk_name.as_deref().unwrap_or("undefined");
        let group_options = options
            .group_options
            .as_ref()
            .map_or_else(|| "undefined".to_string(), Value::to_string);

        format!(
            "context{} {} {} {} {} {} {} {}",
            options.request,
            options.recursive,
            reg_exp_to_string(options.reg_exp.as_ref()),
            reg_exp_to_string(options.include.as_ref()),
            reg_exp_to_string(options.exclude.as_ref()),
            options.mode,
            chunk_name,
            group_options,
        )
    }
}

fn reg_exp_to_string(reg_exp: Option<&ContextRegExp>) -> String {
    reg_exp.map(ToString::to_string).unwrap_or_default()
}

impl HasRequest for ContextDependency {
    fn request(&self) -> Option<&str> {
        Some(&self.options.request)
    }
}

impl HasRange for ContextDependency {
    fn range(&self) -> Option<SourceRange> {
        self.range
    }
}

impl ProducesWarnings for ContextDependency {
    fn warnings(&self, _graph: &ModuleGraph) -> Vec<DependencyWarning> {
        let mut warnings = Vec::new();
        if let Some(critical) = &self.critical {
            warnings.push(DependencyWarning::critical(critical.clone()));
        }
        if self.had_global_or_sticky_reg_exp {
            warnings.push(DependencyWarning::critical(GLOBAL_OR_STICKY_WARNING));
        }
        warnings
    }
}

/// Wire form; deserialization re-runs pattern validation via [`ContextDependency::new`]
/// and keeps a flag recorded by an earlier validation.
#[derive(Serialize, Deserialize)]
struct RawContextDependency {
    #[serde(flatten)]
    options: ContextOptions,
    #[serde(default)]
    critical: Option<String>,
    #[serde(default)]
    range: Option<SourceRange>,
    #[serde(default)]
    value_range: Option<SourceRange>,
    #[serde(default, skip_serializing_if = "is_false")]
    had_global_or_sticky_reg_exp: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl From<RawContextDependency> for ContextDependency {
    fn from(raw: RawContextDependency) -> Self {
        let mut dep = ContextDependency::new(raw.options);
        dep.critical = raw.critical;
        dep.range = raw.range;
        dep.value_range = raw.value_range;
        dep.had_global_or_sticky_reg_exp |= raw.had_global_or_sticky_reg_exp;
        dep
    }
}

impl From<ContextDependency> for RawContextDependency {
    fn from(dep: ContextDependency) -> Self {
        Self {
            options: dep.options,
            critical: dep.critical,
            range: dep.range,
            value_range: dep.value_range,
            had_global_or_sticky_reg_exp: dep.had_global_or_sticky_reg_exp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(reg_exp: Option<ContextRegExp>) -> ContextOptions {
        ContextOptions {
            request: "./locales".to_string(),
            recursive: true,
            reg_exp,
            ..Default::default()
        }
    }

    #[test]
    fn global_pattern_is_discarded() {
        let dep = ContextDependency::new(options(Some(ContextRegExp::new(r"\.json$", "g"))));

        assert!(dep.options().reg_exp.is_none());
        assert!(dep.had_global_or_sticky_reg_exp());
        assert!(dep.is_critical());
    }

    #[test]
    fn sticky_pattern_is_discarded() {
        let (pattern, unsafe_flag) = validate_reg_exp(Some(ContextRegExp::new("a", "iy")));
        assert!(pattern.is_none());
        assert!(unsafe_flag);
    }

    #[test]
    fn safe_pattern_is_kept() {
        let dep = ContextDependency::new(options(Some(ContextRegExp::new(r"\.json$", "i"))));

        assert_eq!(dep.options().reg_exp, Some(ContextRegExp::new(r"\.json$", "i")));
        assert!(!dep.had_global_or_sticky_reg_exp());
        assert!(!dep.is_critical());
        assert!(dep.warnings(&ModuleGraph::new().unwrap()).is_empty());
    }

    #[test]
    fn global_pattern_with_critical_yields_two_warnings() {
        let dep = ContextDependency::new(options(Some(ContextRegExp::new("x", "g"))))
            .with_critical("the request of a dependency is an expression");

        let warnings = dep.warnings(&ModuleGraph::new().unwrap());
        assert_eq!(
            warnings,
            vec![
                DependencyWarning::critical("the request of a dependency is an expression"),
                DependencyWarning::critical(
                    "Contexts can't use RegExps with the 'g' or 'y' flags."
                ),
            ]
        );
        assert_eq!(
            warnings[0].to_string(),
            "Critical dependency: the request of a dependency is an expression"
        );
    }

    #[test]
    fn resource_identifier_covers_every_option() {
        let dep = ContextDependency::new(ContextOptions {
            request: "./pages".to_string(),
            recursive: true,
            reg_exp: Some(ContextRegExp::new(r"^\./.*\.js$", "")),
            include: None,
            exclude: Some(ContextRegExp::new("test", "i")),
            mode: ContextMode::LazyOnce,
            chunk_name: Some("pages".to_string()),
            group_options: Some(serde_json::json!({ "prefetchOrder": 1 })),
        });

        assert_eq!(
            dep.resource_identifier(),
            r#"context./pages true /^\./.*\.js$/  /test/i lazy-once pages {"prefetchOrder":1}"#
        );
    }

    #[test]
    fn identical_options_share_identifier() {
        let a = ContextDependency::new(options(None)).with_range(SourceRange::new(0, 10));
        let b = ContextDependency::new(options(None)).with_range(SourceRange::new(40, 50));

        assert_eq!(a.resource_identifier(), b.resource_identifier());
        assert_eq!(
            a.resource_identifier(),
            "context./locales true    sync undefined undefined"
        );
    }

    #[test]
    fn deserialization_validates_pattern() {
        let json = serde_json::json!({
            "request": "./icons",
            "recursive": false,
            "reg_exp": { "source": "svg$", "flags": "gi" }
        });

        let dep: ContextDependency = serde_json::from_value(json).unwrap();
        assert!(dep.options().reg_exp.is_none());
        assert!(dep.had_global_or_sticky_reg_exp());
    }

    #[test]
    fn absent_mode_renders_as_sync() {
        let json = serde_json::json!({ "request": "./pages", "recursive": true });

        let dep: ContextDependency = serde_json::from_value(json).unwrap();
        assert_eq!(dep.options().mode, ContextMode::Sync);
        assert_eq!(
            dep.resource_identifier(),
            "context./pages true    sync undefined undefined"
        );
    }

    #[test]
    fn serialized_form_keeps_unsafe_flag() {
        let dep = ContextDependency::new(options(Some(ContextRegExp::new("x", "y"))));

        let back: ContextDependency =
            serde_json::from_value(serde_json::to_value(&dep).unwrap()).unwrap();
        assert!(back.had_global_or_sticky_reg_exp());
        assert_eq!(back, dep);
    }
}

//! Theme configuration: token tables, base unit, and breakpoint keys.
//!
//! A [`Theme`] is the configuration a caller injects into every
//! resolution call. It can be built programmatically or loaded from a
//! YAML file:
//!
//! ```yaml
//! unit: px
//! breakpoints: [sm, md, lg, xl]
//! tokens:
//!   space-md: 24
//!   accent: "#c9a227"
//! ```
//!
//! Themes are plain data and hold no global state; pass them explicitly
//! to [`resolve`](crate::resolve) call sites.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ResolveError, Result};

/// Default length unit appended to bare numbers.
pub const DEFAULT_UNIT: &str = "px";

/// Default breakpoint keys, narrowest first.
pub const DEFAULT_BREAKPOINTS: [&str; 4] = ["sm", "md", "lg", "xl"];

/// Type-correct fallback for a missing themed color.
///
/// The value is a valid CSS color, not a number; a numeric stand-in
/// would produce an invalid declaration the renderer cannot paint.
pub const DEFAULT_COLOR: &str = "transparent";

/// A value in the theme's token table.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

impl TokenValue {
    /// Stringifies the token value. Numbers render without a unit;
    /// units are the resolver's concern, not the table's.
    pub fn render(&self) -> String {
        match self {
            TokenValue::Number(value) => format!("{}", value),
            TokenValue::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        TokenValue::Number(f64::from(value))
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YamlToken {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    unit: Option<String>,
    breakpoints: Option<Vec<String>>,
    #[serde(default)]
    tokens: HashMap<String, YamlToken>,
}

/// A named token table with a base unit and breakpoint keys.
///
/// # Example: Programmatic Construction
///
/// ```rust
/// use sequin::Theme;
///
/// let theme = Theme::named("brand")
///     .add("space-md", 24)
///     .add("accent", "#c9a227")
///     .with_unit("rem");
/// ```
///
/// # Example: From YAML
///
/// ```rust
/// use sequin::Theme;
///
/// let theme = Theme::from_yaml(r##"
/// unit: px
/// tokens:
///   space-md: 24
///   accent: "#c9a227"
/// "##).unwrap();
/// assert_eq!(theme.get("space-md").unwrap().render(), "24");
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name (optional, typically derived from filename).
    name: Option<String>,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
    unit: String,
    tokens: HashMap<String, TokenValue>,
    breakpoints: Vec<String>,
}

impl Theme {
    /// Creates an empty, unnamed theme with default unit and
    /// breakpoints.
    pub fn new() -> Self {
        Self {
            name: None,
            source_path: None,
            unit: DEFAULT_UNIT.to_string(),
            tokens: HashMap::new(),
            breakpoints: DEFAULT_BREAKPOINTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the length unit appended to bare numeric values.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Replaces the breakpoint key list.
    pub fn with_breakpoints<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breakpoints = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a named token, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, value: impl Into<TokenValue>) -> Self {
        self.tokens.insert(name.to_string(), value.into());
        self
    }

    /// Loads a theme from a YAML file.
    ///
    /// The theme name is derived from the filename (without extension)
    /// and the source path is stored for [`refresh`](Theme::refresh).
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ResolveError::ThemeLoad {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());

        let mut theme = Self::from_yaml(&content)?;
        theme.name = name;
        theme.source_path = Some(path.to_path_buf());
        Ok(theme)
    }

    /// Creates a theme from YAML content.
    ///
    /// Recognized top-level keys: `unit` (string), `breakpoints`
    /// (string list), `tokens` (name to number-or-string map). Omitted
    /// keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ThemeParse`] if parsing fails.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: ThemeFile = serde_yaml::from_str(yaml)?;
        let mut theme = Self::new();
        if let Some(unit) = file.unit {
            theme.unit = unit;
        }
        if let Some(breakpoints) = file.breakpoints {
            theme.breakpoints = breakpoints;
        }
        for (name, value) in file.tokens {
            let value = match value {
                YamlToken::Number(number) => TokenValue::Number(number),
                YamlToken::Text(text) => TokenValue::Text(text),
            };
            theme.tokens.insert(name, value);
        }
        Ok(theme)
    }

    /// Reloads the theme from its source file.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if the theme has no source file or
    /// the file cannot be read or parsed.
    pub fn refresh(&mut self) -> Result<()> {
        let path = self
            .source_path
            .clone()
            .ok_or_else(|| ResolveError::ThemeLoad {
                message: "cannot refresh: theme has no source file".to_string(),
            })?;
        let reloaded = Self::from_file(&path)?;
        self.unit = reloaded.unit;
        self.tokens = reloaded.tokens;
        self.breakpoints = reloaded.breakpoints;
        Ok(())
    }

    /// Merges another theme into this one.
    ///
    /// Tokens from `other` take precedence; `other`'s unit and
    /// breakpoints replace this theme's.
    pub fn merge(mut self, other: Theme) -> Self {
        self.tokens.extend(other.tokens);
        self.unit = other.unit;
        self.breakpoints = other.breakpoints;
        self
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the source file path, if loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The length unit appended to bare numeric values.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Looks up a token by name.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.tokens.get(name)
    }

    /// Resolves a themed color, falling back to [`DEFAULT_COLOR`] when
    /// the token is missing or (incorrectly) numeric.
    pub fn color_or_default(&self, name: &str) -> String {
        match self.tokens.get(name) {
            Some(TokenValue::Text(text)) => text.clone(),
            _ => DEFAULT_COLOR.to_string(),
        }
    }

    /// True if the theme declares the given breakpoint key.
    pub fn has_breakpoint(&self, name: &str) -> bool {
        self.breakpoints.iter().any(|key| key == name)
    }

    /// Declared breakpoint keys, narrowest first.
    pub fn breakpoints(&self) -> impl Iterator<Item = &str> {
        self.breakpoints.iter().map(String::as_str)
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of defined tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_new_defaults() {
        let theme = Theme::new();
        assert!(theme.is_empty());
        assert_eq!(theme.unit(), "px");
        assert!(theme.has_breakpoint("md"));
        assert!(!theme.has_breakpoint("print"));
    }

    #[test]
    fn test_theme_add_tokens() {
        let theme = Theme::new().add("space-md", 24).add("accent", "#c9a227");
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.get("space-md"), Some(&TokenValue::Number(24.0)));
        assert_eq!(theme.get("space-md").unwrap().render(), "24");
        assert_eq!(theme.get("accent").unwrap().render(), "#c9a227");
    }

    #[test]
    fn test_token_render_trims_integral_numbers() {
        assert_eq!(TokenValue::Number(24.0).render(), "24");
        assert_eq!(TokenValue::Number(1.5).render(), "1.5");
    }

    #[test]
    fn test_theme_named() {
        let theme = Theme::named("brand");
        assert_eq!(theme.name(), Some("brand"));
        assert_eq!(theme.source_path(), None);
    }

    #[test]
    fn test_theme_from_yaml() {
        let theme = Theme::from_yaml(
            r##"
            unit: rem
            breakpoints: [compact, wide]
            tokens:
              space-md: 1.5
              accent: "#c9a227"
            "##,
        )
        .unwrap();

        assert_eq!(theme.unit(), "rem");
        assert!(theme.has_breakpoint("wide"));
        assert!(!theme.has_breakpoint("md"));
        assert_eq!(theme.get("space-md").unwrap().render(), "1.5");
    }

    #[test]
    fn test_theme_from_yaml_defaults() {
        let theme = Theme::from_yaml("tokens:\n  gap: 8\n").unwrap();
        assert_eq!(theme.unit(), "px");
        assert!(theme.has_breakpoint("xl"));
    }

    #[test]
    fn test_theme_from_yaml_invalid() {
        assert!(Theme::from_yaml("not valid yaml: [").is_err());
    }

    #[test]
    fn test_theme_from_yaml_unknown_key_rejected() {
        assert!(Theme::from_yaml("colour_table:\n  accent: red\n").is_err());
    }

    #[test]
    fn test_theme_merge() {
        let base = Theme::new().add("keep", 1).add("overwrite", 2);
        let user = Theme::new().add("overwrite", 3).add("new", 4).with_unit("em");

        let merged = base.merge(user);
        assert_eq!(merged.get("keep").unwrap().render(), "1");
        assert_eq!(merged.get("overwrite").unwrap().render(), "3");
        assert_eq!(merged.get("new").unwrap().render(), "4");
        assert_eq!(merged.unit(), "em");
    }

    #[test]
    fn test_color_or_default() {
        let theme = Theme::new().add("accent", "#c9a227").add("broken", 1);
        assert_eq!(theme.color_or_default("accent"), "#c9a227");
        // A numeric token is not a color; fall back instead of emitting "1".
        assert_eq!(theme.color_or_default("broken"), DEFAULT_COLOR);
        assert_eq!(theme.color_or_default("missing"), DEFAULT_COLOR);
    }

    #[test]
    fn test_refresh_without_source() {
        let mut theme = Theme::new();
        assert!(theme.refresh().is_err());
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};
use crate::ignore::IgnoreSet;

/// Caller-facing comparison options.
///
/// Every field has a default, so a partial TOML or JSON document overlays
/// onto [`DiffOptions::default`]. Keys are accepted in camelCase
/// (`ignoreProperties`) or snake_case (`ignore_properties`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffOptions {
    /// Path patterns excluded from additions, deletions and updates.
    #[serde(alias = "ignore_properties")]
    pub ignore_properties: Vec<String>,
    /// Treat `30` and `"30"` (and similar pairs) as equal.
    #[serde(alias = "enable_type_coercion")]
    pub enable_type_coercion: bool,
    /// When `false`, arrays of primitives are compared as multisets.
    #[serde(alias = "array_order_matters")]
    pub array_order_matters: bool,
    /// Maximum number of nested-object descents.
    #[serde(alias = "max_depth")]
    pub max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_properties: Vec::new(),
            enable_type_coercion: true,
            array_order_matters: true,
            max_depth: 10,
        }
    }
}

impl DiffOptions {
    /// Add one ignore pattern.
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_properties.push(pattern.into());
        self
    }

    pub fn with_type_coercion(mut self, enabled: bool) -> Self {
        self.enable_type_coercion = enabled;
        self
    }

    pub fn with_array_order(mut self, matters: bool) -> Self {
        self.array_order_matters = matters;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse options from TOML, filling unspecified fields with defaults.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse options from JSON, filling unspecified fields with defaults.
    pub fn from_json_str(s: &str) -> DiffResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load options from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> DiffResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DiffError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(DiffError::UnsupportedConfig(path.display().to_string())),
        }
    }

    /// Freeze these options for a traversal, compiling the ignore patterns.
    pub fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions {
            ignore: IgnoreSet::new(&self.ignore_properties),
            coercion: self.enable_type_coercion,
            order_matters: self.array_order_matters,
            max_depth: self.max_depth,
        }
    }
}

/// Options frozen for one or more traversals. Read-only once built.
#[derive(Clone, Debug)]
pub struct ResolvedOptions {
    pub ignore: IgnoreSet,
    pub coercion: bool,
    pub order_matters: bool,
    pub max_depth: usize,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        DiffOptions::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let o = DiffOptions::default();
        assert!(o.ignore_properties.is_empty());
        assert!(o.enable_type_coercion);
        assert!(o.array_order_matters);
        assert_eq!(o.max_depth, 10);
    }

    #[test]
    fn builder_methods() {
        let o = DiffOptions::default()
            .ignore("_id")
            .ignore("meta.*")
            .with_type_coercion(false)
            .with_array_order(false)
            .with_max_depth(3);
        assert_eq!(o.ignore_properties, vec!["_id", "meta.*"]);
        assert!(!o.enable_type_coercion);
        assert!(!o.array_order_matters);
        assert_eq!(o.max_depth, 3);
    }

    #[test]
    fn partial_json_overlays_defaults() {
        let o = DiffOptions::from_json_str(r#"{"enableTypeCoercion": false}"#).unwrap();
        assert!(!o.enable_type_coercion);
        assert!(o.array_order_matters);
        assert_eq!(o.max_depth, 10);
    }

    #[test]
    fn toml_accepts_snake_case() {
        let o = DiffOptions::from_toml_str(
            "ignore_properties = [\"user._id\"]\nmax_depth = 2\n",
        )
        .unwrap();
        assert_eq!(o.ignore_properties, vec!["user._id"]);
        assert_eq!(o.max_depth, 2);
        assert!(o.enable_type_coercion);
    }

    #[test]
    fn toml_accepts_camel_case() {
        let o = DiffOptions::from_toml_str("arrayOrderMatters = false\n").unwrap();
        assert!(!o.array_order_matters);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = DiffOptions::from_toml_str("max_depth = \"deep\"").unwrap_err();
        assert!(matches!(err, DiffError::Toml(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "ignoreProperties = [\"_id\"]").unwrap();
        let o = DiffOptions::load(file.path()).unwrap();
        assert_eq!(o.ignore_properties, vec!["_id"]);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = DiffOptions::load(file.path()).unwrap_err();
        assert!(matches!(err, DiffError::UnsupportedConfig(_)));
    }

    #[test]
    fn load_missing_file() {
        let err = DiffOptions::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, DiffError::Io { .. }));
    }

    #[test]
    fn resolve_compiles_patterns() {
        let resolved = DiffOptions::default().ignore("_id").resolve();
        assert_eq!(resolved.ignore.len(), 1);
        assert!(resolved.ignore.matches("user._id"));
        assert!(resolved.coercion);
        assert_eq!(resolved.max_depth, 10);
    }
}

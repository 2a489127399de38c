//! YAML stylesheets describing variant tables.
//!
//! A stylesheet is a mapping of component name to table definition:
//!
//! ```yaml
//! button:
//!   base: "inline-flex items-center"
//!   variants:
//!     - axis: variant
//!       default: default
//!       values:
//!         default: "bg-primary text-primary-foreground"
//!         ghost: [bg-transparent, text-slate-600]
//!     - axis: size
//!       default: default
//!       values:
//!         default: "px-4 py-3"
//!         sm: "px-3 py-2 text-sm"
//!
//! card:
//!   base: "rounded-xl border"
//! ```
//!
//! Token lists may be written as a whitespace-separated string or as a
//! sequence. Axes resolve in the order they are listed; values keep their
//! document order. Parsed registries are validated before being returned.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::axis::VariantAxis;
use crate::error::StylesheetError;
use crate::registry::VariantRegistry;
use crate::table::VariantTable;

/// Recognized stylesheet file extensions.
pub const STYLESHEET_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// A token list as written in YAML.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokensDef {
    Line(String),
    List(Vec<String>),
}

impl TokensDef {
    fn into_tokens(self) -> Vec<String> {
        match self {
            TokensDef::Line(line) => line.split_whitespace().map(str::to_string).collect(),
            TokensDef::List(list) => list
                .iter()
                .flat_map(|entry| entry.split_whitespace())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentDef {
    #[serde(default)]
    base: Option<TokensDef>,
    #[serde(default)]
    variants: Vec<AxisDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AxisDef {
    axis: String,
    #[serde(default)]
    default: Option<Value>,
    // Kept as a raw mapping so value order follows the document.
    values: Mapping,
}

impl AxisDef {
    fn into_axis(self) -> Result<VariantAxis, StylesheetError> {
        let mut axis = VariantAxis::new(self.axis.as_str());
        for (key, tokens) in self.values {
            let value = value_name(&key).ok_or_else(|| StylesheetError::Parse {
                message: format!("axis '{}' has a non-scalar value name", self.axis),
            })?;
            let tokens: TokensDef = serde_yaml::from_value(tokens)?;
            axis = axis.value_tokens(value, tokens.into_tokens());
        }
        if let Some(default) = self.default {
            let default = value_name(&default).ok_or_else(|| StylesheetError::Parse {
                message: format!("axis '{}' has a non-scalar default", self.axis),
            })?;
            axis = axis.default_value(default);
        }
        Ok(axis)
    }
}

// YAML allows unquoted keys such as `sm` or `1`; accept any scalar.
fn value_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parses a YAML stylesheet into a validated registry.
///
/// # Errors
///
/// Returns [`StylesheetError::Parse`] for malformed YAML or schema mismatches
/// and [`StylesheetError::Invalid`] when a table breaks a validation rule.
pub fn parse_stylesheet(source: &str) -> Result<VariantRegistry, StylesheetError> {
    let components: Mapping = match serde_yaml::from_str::<Option<Mapping>>(source)? {
        Some(components) => components,
        None => Mapping::new(),
    };

    let mut registry = VariantRegistry::new();
    for (name, definition) in components {
        let name = value_name(&name).ok_or_else(|| StylesheetError::Parse {
            message: "component names must be scalars".to_string(),
        })?;
        let definition: ComponentDef = serde_yaml::from_value(definition)?;

        let base = definition.base.map(TokensDef::into_tokens).unwrap_or_default();
        let mut table = VariantTable::from_tokens(base);
        for axis in definition.variants {
            table = table.axis(axis.into_axis()?);
        }
        registry.add(name, table);
    }

    registry.validate()?;
    debug!(components = registry.len(), "parsed stylesheet");
    Ok(registry)
}

/// Reads and parses a stylesheet file.
pub fn load_stylesheet(path: impl AsRef<Path>) -> Result<VariantRegistry, StylesheetError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading stylesheet");
    parse_stylesheet(&source)
}

//! Error types for variant tables, registries and stylesheets.

use std::path::PathBuf;

use thiserror::Error;

/// A variant table that breaks one of its construction rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    /// An axis was declared without any values.
    #[error("axis '{axis}' declares no values")]
    EmptyAxis { axis: String },

    /// An axis has values but no declared default.
    #[error("axis '{axis}' has no default value")]
    MissingDefault { axis: String },

    /// The declared default is not one of the axis values.
    #[error("axis '{axis}' defaults to undeclared value '{value}'")]
    UnknownDefault { axis: String, value: String },

    /// An axis value maps to no tokens.
    #[error("axis '{axis}' value '{value}' has an empty fragment")]
    EmptyFragment { axis: String, value: String },
}

/// Errors from looking up or validating a [`VariantRegistry`](crate::VariantRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No table is registered under the requested component name.
    #[error("unknown component '{name}'")]
    UnknownComponent { name: String },

    /// A registered table failed validation.
    #[error("component '{component}': {source}")]
    Invalid {
        component: String,
        #[source]
        source: VariantError,
    },
}

/// Errors from reading a YAML stylesheet.
#[derive(Debug, Error)]
pub enum StylesheetError {
    /// The document is not valid YAML or does not match the schema.
    #[error("invalid stylesheet: {message}")]
    Parse { message: String },

    /// The stylesheet file could not be read.
    #[error("failed to read stylesheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stylesheet parsed but describes an invalid table.
    #[error(transparent)]
    Invalid(#[from] RegistryError),
}

impl From<serde_yaml::Error> for StylesheetError {
    fn from(err: serde_yaml::Error) -> Self {
        StylesheetError::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_default_display() {
        let err = VariantError::UnknownDefault {
            axis: "size".to_string(),
            value: "xl".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("size"));
        assert!(msg.contains("xl"));
    }

    #[test]
    fn test_invalid_component_display() {
        let err = RegistryError::Invalid {
            component: "button".to_string(),
            source: VariantError::MissingDefault {
                axis: "variant".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "component 'button': axis 'variant' has no default value"
        );
    }

    #[test]
    fn test_io_error_display() {
        let err = StylesheetError::Io {
            path: PathBuf::from("/tmp/missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.yaml"));
        assert!(msg.contains("gone"));
    }
}

//! Render errors.

use swatch_variants::RegistryError;
use thiserror::Error;

/// Errors produced while rendering components or templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A component's table is missing from the registry or invalid.
    #[error(transparent)]
    Styles(#[from] RegistryError),

    /// A template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_error_is_transparent() {
        let err: RenderError = RegistryError::UnknownComponent {
            name: "modal".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown component 'modal'");
    }

    #[test]
    fn test_template_error_display() {
        let err: RenderError =
            minijinja::Error::new(minijinja::ErrorKind::TemplateNotFound, "missing").into();
        assert!(err.to_string().starts_with("template error:"));
    }
}

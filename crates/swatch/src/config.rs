//! Style configuration: the built-in tables plus an optional stylesheet.

use std::path::Path;

use anyhow::{Context, Result};
use swatch_render::builtin_styles;
use swatch_variants::{load_stylesheet, VariantRegistry, STYLESHEET_EXTENSIONS};
use tracing::{info, warn};

/// Returns the built-in registry, overlaid with `stylesheet` when given.
///
/// Tables in the stylesheet replace built-in tables of the same name; other
/// built-ins are kept.
pub fn load_styles(stylesheet: Option<&Path>) -> Result<VariantRegistry> {
    let mut styles = builtin_styles().clone();
    let Some(path) = stylesheet else {
        return Ok(styles);
    };

    let name = path.to_string_lossy();
    if !STYLESHEET_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        warn!(path = %path.display(), "stylesheet does not have a .yaml or .yml extension");
    }

    let overlay = load_stylesheet(path)
        .with_context(|| format!("failed to load stylesheet {}", path.display()))?;
    info!(path = %path.display(), components = overlay.len(), "applying stylesheet");
    styles.extend(overlay);
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use swatch_variants::Selection;

    #[test]
    fn test_builtin_without_stylesheet() {
        let styles = load_styles(None).unwrap();
        assert_eq!(styles.len(), builtin_styles().len());
    }

    #[test]
    fn test_overlay_replaces_and_keeps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.yaml");
        fs::write(&path, "card:\n  base: brand-card\n").unwrap();

        let styles = load_styles(Some(&path)).unwrap();
        assert_eq!(
            styles.resolve("card", &Selection::new(), "").unwrap(),
            "brand-card"
        );
        assert!(styles.has("button"));
        assert_eq!(styles.len(), builtin_styles().len());
    }

    #[test]
    fn test_missing_stylesheet_has_context() {
        let err = load_styles(Some(Path::new("/nonexistent/brand.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load stylesheet"));
    }
}

//! Variant axes: one named dimension of a component's look.

use crate::error::VariantError;
use crate::tokens::split_tokens;

/// A named variant dimension mapping each legal value to a fragment.
///
/// Values keep their declaration order. Adding a value that already exists
/// replaces its fragment in place.
///
/// # Example
///
/// ```rust
/// use swatch_variants::VariantAxis;
///
/// let size = VariantAxis::new("size")
///     .value("default", "px-4 py-3")
///     .value("sm", "px-3 py-2 text-sm")
///     .default_value("default");
///
/// assert_eq!(size.fragment("sm"), Some(&["px-3".to_string(), "py-2".into(), "text-sm".into()][..]));
/// assert_eq!(size.fragment("xl"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAxis {
    name: String,
    default: Option<String>,
    values: Vec<(String, Vec<String>)>,
}

impl VariantAxis {
    /// Creates an axis with no values and no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            values: Vec::new(),
        }
    }

    /// Declares a value and the class tokens it contributes.
    pub fn value(mut self, value: impl Into<String>, tokens: &str) -> Self {
        self.insert(value.into(), split_tokens(tokens));
        self
    }

    /// Declares a value from an already-split token list.
    pub fn value_tokens<I, S>(mut self, value: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens.into_iter().map(Into::into).collect();
        self.insert(value.into(), tokens);
        self
    }

    /// Sets the value used when a selection leaves this axis unset.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn insert(&mut self, value: String, tokens: Vec<String>) {
        match self.values.iter_mut().find(|(name, _)| *name == value) {
            Some(slot) => slot.1 = tokens,
            None => self.values.push((value, tokens)),
        }
    }

    /// The axis name, e.g. `"variant"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared default value, if any.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The tokens contributed by `value`, or `None` if the value is not declared.
    pub fn fragment(&self, value: &str) -> Option<&[String]> {
        self.values
            .iter()
            .find(|(name, _)| name == value)
            .map(|(_, tokens)| tokens.as_slice())
    }

    /// Declared values in order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    /// Checks that the axis has values, a declared default and no empty fragments.
    pub fn validate(&self) -> Result<(), VariantError> {
        if self.values.is_empty() {
            return Err(VariantError::EmptyAxis {
                axis: self.name.clone(),
            });
        }

        let default = self
            .default
            .as_deref()
            .ok_or_else(|| VariantError::MissingDefault {
                axis: self.name.clone(),
            })?;

        if self.fragment(default).is_none() {
            return Err(VariantError::UnknownDefault {
                axis: self.name.clone(),
                value: default.to_string(),
            });
        }

        if let Some((value, _)) = self.values.iter().find(|(_, tokens)| tokens.is_empty()) {
            return Err(VariantError::EmptyFragment {
                axis: self.name.clone(),
                value: value.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_axis() -> VariantAxis {
        VariantAxis::new("size")
            .value("default", "px-4 py-3")
            .value("sm", "px-3 py-2")
            .default_value("default")
    }

    #[test]
    fn test_values_keep_declaration_order() {
        let axis = size_axis().value("lg", "px-6");
        let values: Vec<&str> = axis.values().collect();
        assert_eq!(values, vec!["default", "sm", "lg"]);
    }

    #[test]
    fn test_value_replaces_in_place() {
        let axis = size_axis().value("default", "px-5");
        let values: Vec<&str> = axis.values().collect();
        assert_eq!(values, vec!["default", "sm"]);
        assert_eq!(axis.fragment("default"), Some(&["px-5".to_string()][..]));
    }

    #[test]
    fn test_value_tokens() {
        let axis = VariantAxis::new("tone").value_tokens("warm", ["bg-red-100", "text-red-900"]);
        assert_eq!(axis.fragment("warm").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_validate_ok() {
        assert!(size_axis().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_axis() {
        let err = VariantAxis::new("size").default_value("default").validate();
        assert!(matches!(err, Err(VariantError::EmptyAxis { .. })));
    }

    #[test]
    fn test_validate_missing_default() {
        let err = VariantAxis::new("size").value("sm", "px-3").validate();
        assert!(matches!(err, Err(VariantError::MissingDefault { .. })));
    }

    #[test]
    fn test_validate_unknown_default() {
        let err = size_axis().default_value("xl").validate();
        assert_eq!(
            err,
            Err(VariantError::UnknownDefault {
                axis: "size".to_string(),
                value: "xl".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_empty_fragment() {
        let err = size_axis().value("none", "   ").validate();
        assert!(matches!(err, Err(VariantError::EmptyFragment { value, .. }) if value == "none"));
    }
}

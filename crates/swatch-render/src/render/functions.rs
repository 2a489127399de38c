//! Template helpers for class resolution.

use std::sync::Arc;

use minijinja::value::Kwargs;
use minijinja::{Environment, Error, ErrorKind, Value};
use swatch_variants::{merge_tokens, Selection, VariantRegistry};

/// Registers the class helpers on a minijinja environment.
///
/// - `variants(component, **kwargs)`: resolves a component's class string.
///   Every keyword except `class` selects an axis value; `class` is the
///   override. `none` values leave the axis at its default.
/// - `cx(base, extra)`: merges two class strings, later tokens winning.
pub(crate) fn register_functions(env: &mut Environment<'static>, styles: Arc<VariantRegistry>) {
    env.add_function(
        "variants",
        move |component: String, kwargs: Kwargs| -> Result<String, Error> {
            let keys: Vec<String> = kwargs.args().map(str::to_string).collect();
            let mut selection = Selection::new();
            let mut class = String::new();

            for key in keys {
                let value: Value = kwargs.get(&key)?;
                if value.is_none() || value.is_undefined() {
                    continue;
                }
                if key == "class" {
                    class = value.to_string();
                } else {
                    selection.insert(key, value.to_string());
                }
            }

            styles
                .resolve(&component, &selection, &class)
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
        },
    );

    env.add_filter("cx", |base: String, extra: Option<String>| -> String {
        merge_tokens([base.as_str(), extra.as_deref().unwrap_or("")])
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_variants::{VariantAxis, VariantTable};

    fn env() -> Environment<'static> {
        let styles = VariantRegistry::new().with(
            "button",
            VariantTable::new("btn").axis(
                VariantAxis::new("variant")
                    .value("default", "bg-a")
                    .value("ghost", "bg-transparent")
                    .default_value("default"),
            ),
        );
        let mut env = Environment::new();
        register_functions(&mut env, Arc::new(styles));
        env
    }

    fn render(source: &str) -> Result<String, Error> {
        env().render_str(source, ())
    }

    #[test]
    fn test_variants_defaults() {
        assert_eq!(render(r#"{{ variants("button") }}"#).unwrap(), "btn bg-a");
    }

    #[test]
    fn test_variants_with_axis_and_class() {
        assert_eq!(
            render(r#"{{ variants("button", variant="ghost", class="w-full") }}"#).unwrap(),
            "btn bg-transparent w-full"
        );
    }

    #[test]
    fn test_variants_none_keeps_default() {
        assert_eq!(
            render(r#"{{ variants("button", variant=none) }}"#).unwrap(),
            "btn bg-a"
        );
    }

    #[test]
    fn test_variants_unknown_value_drops_fragment() {
        assert_eq!(
            render(r#"{{ variants("button", variant="sparkly") }}"#).unwrap(),
            "btn"
        );
    }

    #[test]
    fn test_variants_unknown_component() {
        let err = render(r#"{{ variants("modal") }}"#).unwrap_err();
        assert!(err.to_string().contains("unknown component 'modal'"));
    }

    #[test]
    fn test_cx_filter() {
        assert_eq!(render(r#"{{ "a b" | cx("b c") }}"#).unwrap(), "a b c");
        assert_eq!(render(r#"{{ "a b" | cx(missing) }}"#).unwrap(), "a b");
    }
}

//! Page renderer.

use std::sync::Arc;

use minijinja::{context, Environment, Value};
use serde::Serialize;
use swatch_variants::VariantRegistry;
use tracing::debug;

use super::functions::register_functions;
use crate::error::RenderError;
use crate::markup::{render_html, Node};
use crate::styles::builtin_styles;

const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Renders component trees and templates against one style registry.
///
/// The registry is validated once when the renderer is created. Templates
/// registered on the renderer can call `variants(...)` and the `cx` filter
/// to resolve classes from the same registry.
///
/// # Example
///
/// ```rust
/// use swatch_render::{Button, ButtonVariant, Node, Renderer};
///
/// let renderer = Renderer::with_builtin_styles().unwrap();
/// let page = renderer
///     .render_document("Demo", &Node::from(Button::new().variant(ButtonVariant::Ghost).text("Hi")))
///     .unwrap();
/// assert!(page.starts_with("<!DOCTYPE html>"));
/// assert!(page.contains("data-slot=\"button\""));
/// ```
pub struct Renderer {
    env: Environment<'static>,
    styles: Arc<VariantRegistry>,
}

impl Renderer {
    /// Creates a renderer for `styles`.
    ///
    /// # Errors
    ///
    /// Returns an error if any table in the registry fails validation.
    pub fn new(styles: VariantRegistry) -> Result<Self, RenderError> {
        styles.validate()?;
        let styles = Arc::new(styles);

        let mut env = Environment::new();
        register_functions(&mut env, Arc::clone(&styles));
        env.add_template("page.html", PAGE_TEMPLATE)?;

        debug!(components = styles.len(), "renderer ready");
        Ok(Self { env, styles })
    }

    /// Creates a renderer for the built-in component tables.
    pub fn with_builtin_styles() -> Result<Self, RenderError> {
        Self::new(builtin_styles().clone())
    }

    /// The registry classes are resolved from.
    pub fn styles(&self) -> &VariantRegistry {
        &self.styles
    }

    /// Registers a named template. Names ending in `.html` are auto-escaped.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    /// Renders a component tree to an HTML fragment.
    pub fn render_node(&self, node: &Node) -> Result<String, RenderError> {
        render_html(node, &self.styles)
    }

    /// Renders a component tree inside the full page shell.
    pub fn render_document(&self, title: &str, body: &Node) -> Result<String, RenderError> {
        let body = self.render_node(body)?;
        debug!(title, bytes = body.len(), "rendering document");
        self.render(
            "page.html",
            &context! {
                title => title,
                body => Value::from_safe_string(body),
            },
        )
    }
}

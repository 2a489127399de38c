//! # Swatch Render
//!
//! Presentational UI primitives (button, input, label, card, tabs) that
//! render to HTML with class strings resolved by [`swatch_variants`].
//!
//! Components are plain builder structs. They render against a
//! [`VariantRegistry`](swatch_variants::VariantRegistry), usually the
//! [`builtin_styles`], optionally overlaid with a YAML stylesheet:
//!
//! ```rust
//! use swatch_render::{
//!     builtin_styles, card, card_content, card_header, card_title, render_html, Button,
//!     ButtonVariant, Node,
//! };
//!
//! let tree = card()
//!     .child(card_header().child(card_title("Profile")))
//!     .child(card_content().child(Button::new().variant(ButtonVariant::Destructive).text("Delete")));
//!
//! let html = render_html(&Node::from(tree), builtin_styles()).unwrap();
//! assert!(html.contains("bg-destructive"));
//! ```
//!
//! The [`Renderer`] wraps a minijinja environment for full documents and
//! for templates that resolve classes themselves via `variants(...)`.

mod attrs;
mod components;
mod demo;
mod error;
mod markup;
mod render;
mod styles;

pub use attrs::{Attributes, ButtonType, InputType};
pub use components::{
    card, card_action, card_content, card_description, card_footer, card_header, card_title,
    Button, ButtonSize, ButtonVariant, CardSlot, Container, Input, Label, Tabs, TabsContent,
    TabsList, TabsState, TabsTrigger,
};
pub use demo::{demo_page, DemoOptions, DEMO_TITLE};
pub use error::RenderError;
pub use markup::{is_valid_attr_name, render_html, Component, Element, Node};
pub use render::Renderer;
pub use styles::builtin_styles;

//! Template rendering.
//!
//! [`Renderer`] owns a minijinja environment configured with the page shell
//! and the class helpers from [`functions`].

mod functions;
mod renderer;

pub use renderer::Renderer;

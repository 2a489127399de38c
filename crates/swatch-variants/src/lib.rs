//! # Swatch Variants
//!
//! Resolves a component's semantic props into one utility class string.
//!
//! A component declares a [`VariantTable`]: base tokens that are always
//! applied, plus ordered [`VariantAxis`] dimensions (such as `variant` or
//! `size`) whose values each contribute a fragment of tokens. At render
//! time a [`Selection`] picks values for some axes, the rest fall back to
//! their declared defaults, and a caller override is appended last:
//!
//! ```rust
//! use swatch_variants::{Selection, VariantAxis, VariantTable};
//!
//! let button = VariantTable::new("inline-flex rounded-lg")
//!     .axis(
//!         VariantAxis::new("variant")
//!             .value("default", "bg-primary text-primary-foreground")
//!             .value("ghost", "bg-transparent text-slate-600")
//!             .default_value("default"),
//!     )
//!     .axis(
//!         VariantAxis::new("size")
//!             .value("default", "px-4 py-3")
//!             .value("sm", "px-3 py-2 text-sm")
//!             .default_value("default"),
//!     );
//!
//! let selection = Selection::new().with("size", "sm");
//! assert_eq!(
//!     button.resolve(&selection, "w-full"),
//!     "inline-flex rounded-lg bg-primary text-primary-foreground px-3 py-2 text-sm w-full",
//! );
//! ```
//!
//! ## Merging
//!
//! Tokens are merged with [`merge_tokens`]: exact duplicates are dropped and
//! the last occurrence keeps its position, so a fragment or override that
//! repeats a token moves it later. Only identical spellings are merged;
//! conflicting utilities for the same property are all kept and the styling
//! engine's source order decides.
//!
//! ## Unknown values
//!
//! Selecting a value an axis does not declare is not an error: that axis
//! simply contributes no fragment. Typed enums implementing
//! [`VariantValue`] keep such values out at compile time.
//!
//! ## Registries and stylesheets
//!
//! A [`VariantRegistry`] maps component names to tables. Registries can be
//! loaded from YAML with [`parse_stylesheet`] or [`load_stylesheet`] and
//! layered over one another with [`VariantRegistry::extend`].

mod axis;
mod error;
mod registry;
mod selection;
mod stylesheet;
mod table;
mod tokens;

pub use axis::VariantAxis;
pub use error::{RegistryError, StylesheetError, VariantError};
pub use registry::VariantRegistry;
pub use selection::{Selection, VariantValue};
pub use stylesheet::{load_stylesheet, parse_stylesheet, STYLESHEET_EXTENSIONS};
pub use table::VariantTable;
pub use tokens::{class_names, merge_tokens};

//! Server-side markup tree builder.
//!
//! Callers build a tree of [`Node`]s through chained [`Node::add`] calls (or the
//! convenience constructors layered on top of it) and serialize it either as a
//! bare fragment with [`Node::render`] or as a full document wrapped in the shared
//! page template with [`Node::render_page`].
//!
//! # Architecture
//!
//! - [`PageConfig`]: template parameters shared by every page of one family
//!   (title, stylesheet, navigation bar theme, menu). Created once and shared
//!   behind an [`Arc`](std::sync::Arc).
//! - [`Node`]: one element with a closed set of attribute slots and an ordered list
//!   of owned children. Root nodes carry the page configuration and the active
//!   menu entry.
//! - Rendering is a pure depth-first walk with a fixed attribute order.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use embgui_dom::{MenuItem, PageConfig};
//!
//! let config = Arc::new(PageConfig::new(
//!     "DEMO",
//!     "/app.css",
//!     vec![MenuItem::new("Hello", "/"), MenuItem::new("World", "/world")],
//! ));
//!
//! let mut page = config.new_root("World");
//! page.h1("World!");
//! let html = page.render_page().unwrap();
//!
//! assert!(html.contains("<title>DEMO</title>"));
//! assert!(html.contains("<h1 class='title is-1'>World!</h1>"));
//! ```

mod components;
mod error;
mod node;
mod page;
mod render;

pub use components::Tile;
pub use error::RenderError;
pub use node::{Attributes, Node};
pub use page::{MenuItem, PageConfig};
pub use render::escape_html;

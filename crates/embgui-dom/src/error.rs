//! Error types for page rendering.

/// Error returned by [`Node::render_page`](crate::Node::render_page).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    /// The node is not a page root, so it has no page configuration to render with.
    #[error("cannot render page from non-root node")]
    NonRoot,
}

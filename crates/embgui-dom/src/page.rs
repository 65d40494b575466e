//! Page configuration and the document template.
//!
//! A [`PageConfig`] describes one family of pages: the document title, the
//! stylesheet link and the navigation bar. It is created once (usually at
//! service startup), shared behind an [`Arc`], and used to mint a fresh root
//! [`Node`] per request.

use std::fmt::Write;
use std::sync::Arc;

use crate::error::RenderError;
use crate::node::Node;
use crate::render::escape_html;

/// Default navigation bar theme class.
const DEFAULT_NAV_THEME: &str = "is-white";

/// Default target of the navigation bar brand link.
const DEFAULT_NAV_LINK: &str = "/";

/// Entry in the navigation bar menu.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MenuItem {
    /// Display name, also matched against a root's active menu entry.
    pub name: String,
    /// Link target.
    pub link: String,
}

impl MenuItem {
    /// Create a menu entry.
    #[must_use]
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// Template parameters shared by all pages of one family.
///
/// Fields may be adjusted before the configuration is shared; roots minted
/// afterwards read it at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Document title, also used as the navigation bar brand text.
    pub title: String,
    /// Stylesheet URL linked from the document head.
    pub stylesheet_url: String,
    /// Navigation bar theme class (e.g. `is-light`, `is-dark`).
    pub nav_theme: String,
    /// Target of the navigation bar brand link.
    pub nav_link: String,
    /// Menu entries in display order.
    pub menu: Vec<MenuItem>,
}

impl PageConfig {
    /// Create a configuration with the default navigation theme and brand link.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        stylesheet_url: impl Into<String>,
        menu: Vec<MenuItem>,
    ) -> Self {
        Self {
            title: title.into(),
            stylesheet_url: stylesheet_url.into(),
            nav_theme: DEFAULT_NAV_THEME.to_owned(),
            nav_link: DEFAULT_NAV_LINK.to_owned(),
            menu,
        }
    }

    /// Set the navigation bar theme class.
    #[must_use]
    pub fn with_nav_theme(mut self, nav_theme: impl Into<String>) -> Self {
        self.nav_theme = nav_theme.into();
        self
    }

    /// Set the navigation bar brand link.
    #[must_use]
    pub fn with_nav_link(mut self, nav_link: impl Into<String>) -> Self {
        self.nav_link = nav_link.into();
        self
    }

    /// Mint a fresh page root bound to this configuration.
    #[must_use]
    pub fn new_root(self: &Arc<Self>, active_menu: impl Into<String>) -> Node {
        Node::root(Arc::clone(self), active_menu)
    }

    /// Render the navigation menu anchors, marking `active` as current.
    fn render_menu(&self, active: &str, out: &mut String) {
        for item in &self.menu {
            let class = if item.name == active {
                "navbar-item is-active"
            } else {
                "navbar-item"
            };
            write!(
                out,
                r#"<a class="{class}" href="{}">{}</a>"#,
                escape_html(&item.link),
                escape_html(&item.name)
            )
            .unwrap();
        }
    }
}

impl Node {
    /// Render the full document for this page root.
    ///
    /// Only the root's children are rendered into the content section; the
    /// root itself contributes no element.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NonRoot`] if this node was not created as a page root.
    pub fn render_page(&self) -> Result<String, RenderError> {
        let binding = self.binding().ok_or(RenderError::NonRoot)?;
        let config = binding.config.as_ref();

        tracing::debug!(
            title = %config.title,
            active = %binding.active_menu,
            children = self.children().len(),
            "Rendering page"
        );

        let mut menu = String::new();
        config.render_menu(&binding.active_menu, &mut menu);

        let mut content = String::new();
        for child in self.children() {
            child.render_into(&mut content);
        }

        let title = escape_html(&config.title);
        let stylesheet = escape_html(&config.stylesheet_url);
        let theme = escape_html(&config.nav_theme);
        let nav_link = escape_html(&config.nav_link);

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
	<head>
		<meta charset="utf-8">
		<meta name="viewport" content="width=device-width, initial-scale=1">
		<title>{title}</title>
		<link rel="stylesheet" href="{stylesheet}">
	</head>
	<body>
		<nav class="navbar {theme}">
			<div class="container">
				<div class="navbar-brand">
					<a class="navbar-item brand-text" href="{nav_link}">{title}</a>
				</div>
				<div id="navMenu" class="navbar-menu is-active">
					<div class="navbar-start">{menu}</div>
				</div>
			</div>
		</nav>
		<section class="section">
			<div class="container">
				<div class="content">{content}</div>
			</div>
		</section>
	</body>
</html>
"#
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn demo_config() -> Arc<PageConfig> {
        Arc::new(PageConfig::new(
            "DEMO",
            "/app.css",
            vec![MenuItem::new("Hello", "/"), MenuItem::new("World", "/world")],
        ))
    }

    #[test]
    fn test_new_sets_defaults() {
        let config = PageConfig::new("T", "/s.css", Vec::new());
        assert_eq!(config.nav_theme, "is-white");
        assert_eq!(config.nav_link, "/");
    }

    #[test]
    fn test_builder_overrides_defaults() {
        let config = PageConfig::new("T", "/s.css", Vec::new())
            .with_nav_theme("is-light")
            .with_nav_link("/gui");
        assert_eq!(config.nav_theme, "is-light");
        assert_eq!(config.nav_link, "/gui");
    }

    #[test]
    fn test_render_page_document_structure() {
        let config = demo_config();
        let html = config.new_root("World").render_page().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="utf-8">"#));
        assert!(html.contains(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
        ));
        assert!(html.contains("<title>DEMO</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/app.css">"#));
        assert!(html.contains(r#"<nav class="navbar is-white">"#));
        assert!(html.contains(r#"<a class="navbar-item brand-text" href="/">DEMO</a>"#));
        assert!(html.contains(r#"<div class="content"></div>"#));
    }

    #[test]
    fn test_render_page_marks_active_menu_item() {
        let html = demo_config().new_root("World").render_page().unwrap();

        assert!(html.contains(r#"<a class="navbar-item is-active" href="/world">World</a>"#));
        assert!(html.contains(r#"<a class="navbar-item" href="/">Hello</a>"#));
    }

    #[test]
    fn test_render_page_active_match_is_case_sensitive() {
        let html = demo_config().new_root("world").render_page().unwrap();
        assert!(!html.contains("is-active\" href"));
    }

    #[test]
    fn test_render_page_menu_keeps_order_and_duplicates() {
        let config = Arc::new(PageConfig::new(
            "T",
            "/s.css",
            vec![
                MenuItem::new("B", "/b"),
                MenuItem::new("A", "/a"),
                MenuItem::new("B", "/b2"),
            ],
        ));
        let html = config.new_root("B").render_page().unwrap();

        assert!(html.contains(
            r#"<div class="navbar-start"><a class="navbar-item is-active" href="/b">B</a><a class="navbar-item" href="/a">A</a><a class="navbar-item is-active" href="/b2">B</a></div>"#
        ));
    }

    #[test]
    fn test_render_page_content_is_children_only() {
        let config = demo_config();
        let mut root = config.new_root("Hello");
        root.add(Node::new("p").with_text("one"));
        root.add(Node::new("p").with_text("two"));

        let html = root.render_page().unwrap();

        assert!(html.contains(r#"<div class="content"><p>one</p><p>two</p></div>"#));
        assert!(!html.contains("<>"));
    }

    #[test]
    fn test_render_page_on_child_fails() {
        let config = demo_config();
        let mut root = config.new_root("Hello");
        let child = root.add(Node::new("h1").with_text("x"));

        assert_eq!(child.render_page(), Err(RenderError::NonRoot));
        assert_eq!(
            RenderError::NonRoot.to_string(),
            "cannot render page from non-root node"
        );
    }

    #[test]
    fn test_render_page_on_plain_node_fails() {
        assert_eq!(Node::new("div").render_page(), Err(RenderError::NonRoot));
    }

    #[test]
    fn test_render_page_escapes_config_values() {
        let config = Arc::new(PageConfig::new(
            "A & B",
            "/s.css?v=\"1\"",
            vec![MenuItem::new("<x>", "/?a=1&b=2")],
        ));
        let html = config.new_root("<x>").render_page().unwrap();

        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"href="/s.css?v=&#34;1&#34;""#));
        assert!(html.contains(
            r#"<a class="navbar-item is-active" href="/?a=1&amp;b=2">&lt;x&gt;</a>"#
        ));
    }

    #[test]
    fn test_roots_share_one_config() {
        let config = demo_config();
        let a = config.new_root("Hello");
        let b = config.new_root("World");

        assert_eq!(Arc::strong_count(&config), 3);
        assert_eq!(a.page_config(), b.page_config());
    }

    #[test]
    fn test_root_keeps_config_alive_after_handle_dropped() {
        let config = demo_config();
        let mut root = config.new_root("Hello");
        drop(config);
        root.add(Node::new("p").with_text("still here"));

        let html = root.render_page().unwrap();

        assert!(html.contains("<title>DEMO</title>"));
        assert!(html.contains(r#"<div class="content"><p>still here</p></div>"#));
    }
}

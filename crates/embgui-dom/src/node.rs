//! Markup tree nodes.

use std::sync::Arc;

use crate::page::PageConfig;

/// Attribute slots a node can carry.
///
/// The set is closed: the renderer knows every slot and emits them in a fixed
/// order (see [`Attributes::slots`]). Unset and empty slots are never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub class: Option<String>,
    pub href: Option<String>,
    pub id: Option<String>,
    pub action: Option<String>,
    pub method: Option<String>,
    /// Emitted as `type`.
    pub input_type: Option<String>,
    pub style: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub enctype: Option<String>,
    pub rows: Option<String>,
}

impl Attributes {
    /// Attribute names paired with their values, in emission order.
    #[must_use]
    pub fn slots(&self) -> [(&'static str, Option<&str>); 12] {
        [
            ("class", self.class.as_deref()),
            ("href", self.href.as_deref()),
            ("id", self.id.as_deref()),
            ("action", self.action.as_deref()),
            ("method", self.method.as_deref()),
            ("type", self.input_type.as_deref()),
            ("style", self.style.as_deref()),
            ("name", self.name.as_deref()),
            ("value", self.value.as_deref()),
            ("placeholder", self.placeholder.as_deref()),
            ("enctype", self.enctype.as_deref()),
            ("rows", self.rows.as_deref()),
        ]
    }
}

/// Page binding carried by root nodes only.
#[derive(Debug, Clone)]
pub(crate) struct RootBinding {
    pub(crate) config: Arc<PageConfig>,
    pub(crate) active_menu: String,
}

/// One markup element and its owned subtree.
///
/// Children are owned exclusively by their parent and rendered in insertion
/// order. Build trees with [`Node::add`], which hands back the freshly stored
/// child so construction can continue from it:
///
/// ```
/// use embgui_dom::Node;
///
/// let mut list = Node::new("ul");
/// list.add(Node::new("li").with_text("one"));
/// list.add(Node::new("li")).add(Node::new("a").with_href("/two").with_text("two"));
///
/// assert_eq!(
///     list.render(),
///     "<ul><li>one</li><li><a href='/two'>two</a></li></ul>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Element name. Empty for page roots.
    pub tag: String,
    /// Inline text content, rendered before the children.
    pub text: String,
    /// Emit `text` verbatim instead of escaping it.
    pub raw: bool,
    /// Attribute slots.
    pub attrs: Attributes,
    children: Vec<Node>,
    root: Option<RootBinding>,
}

impl Node {
    /// Create a node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Create a page root bound to `config`.
    ///
    /// The menu entry whose name equals `active_menu` is highlighted when the
    /// page is rendered.
    #[must_use]
    pub fn root(config: Arc<PageConfig>, active_menu: impl Into<String>) -> Self {
        Self {
            root: Some(RootBinding {
                config,
                active_menu: active_menu.into(),
            }),
            ..Default::default()
        }
    }

    /// Append `child` and return the stored child for further building.
    pub fn add(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Child nodes in rendering order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the child nodes.
    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Whether this node can render a full page.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.root.is_some()
    }

    /// Menu entry highlighted on this root's page.
    #[must_use]
    pub fn active_menu(&self) -> Option<&str> {
        self.root.as_ref().map(|r| r.active_menu.as_str())
    }

    /// Page configuration this root was minted from.
    #[must_use]
    pub fn page_config(&self) -> Option<&PageConfig> {
        self.root.as_ref().map(|r| r.config.as_ref())
    }

    pub(crate) fn binding(&self) -> Option<&RootBinding> {
        self.root.as_ref()
    }

    /// Set inline text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Emit text content without escaping.
    #[must_use]
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.attrs.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.attrs.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.attrs.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.attrs.action = Some(action.into());
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.attrs.method = Some(method.into());
        self
    }

    /// Set the `type` attribute.
    #[must_use]
    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.attrs.input_type = Some(input_type.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.attrs.style = Some(style.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attrs.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.attrs.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.attrs.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_enctype(mut self, enctype: impl Into<String>) -> Self {
        self.attrs.enctype = Some(enctype.into());
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.attrs.rows = Some(rows.to_string());
        self
    }
}

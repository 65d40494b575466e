//! Fragment rendering and HTML escaping.

use std::borrow::Cow;

use crate::node::Node;

/// Escape HTML special characters.
///
/// Replaces `&`, `<`, `>`, `'` and `"` with character references. Returns the
/// input unchanged (borrowed) when none of them occur.
///
/// ```
/// use embgui_dom::escape_html;
///
/// assert_eq!(escape_html("a < b & 'c'"), "a &lt; b &amp; &#39;c&#39;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '\'', '"']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\'' => result.push_str("&#39;"),
            '"' => result.push_str("&#34;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

impl Node {
    /// Render this node and its subtree as a markup fragment.
    ///
    /// Every element gets an explicit closing tag, including void-style ones
    /// such as `<hr>`. A page root has no tag of its own and renders as
    /// `<>...</>`; use [`Node::render_page`] to render a full document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Append the rendering of this node and its subtree to `out`.
    pub fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in self.attrs.slots() {
            if let Some(value) = value
                && !value.is_empty()
            {
                out.push(' ');
                out.push_str(name);
                out.push_str("='");
                out.push_str(&escape_html(value));
                out.push('\'');
            }
        }
        out.push('>');

        if self.raw {
            out.push_str(&self.text);
        } else {
            out.push_str(&escape_html(&self.text));
        }

        for child in self.children() {
            child.render_into(out);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

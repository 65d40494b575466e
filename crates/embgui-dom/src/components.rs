//! Convenience constructors.
//!
//! Every constructor here appends a pre-styled element to the receiver with
//! [`Node::add`] and returns the node the caller most likely wants to keep
//! building from. Class names follow the Bulma CSS framework.

use crate::node::Node;

/// Margin applied to buttons so they do not touch.
const BUTTON_STYLE: &str = "margin: .25rem";

/// Single dashboard tile, see [`Node::tiles`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub title: String,
    pub subtitle: String,
}

impl Tile {
    #[must_use]
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

impl Node {
    fn heading(&mut self, level: u8, text: &str) -> &mut Node {
        self.add(
            Node::new(format!("h{level}"))
                .with_class(format!("title is-{level}"))
                .with_text(text),
        )
    }

    pub fn h1(&mut self, text: &str) -> &mut Node {
        self.heading(1, text)
    }

    pub fn h2(&mut self, text: &str) -> &mut Node {
        self.heading(2, text)
    }

    pub fn h3(&mut self, text: &str) -> &mut Node {
        self.heading(3, text)
    }

    pub fn h4(&mut self, text: &str) -> &mut Node {
        self.heading(4, text)
    }

    pub fn h5(&mut self, text: &str) -> &mut Node {
        self.heading(5, text)
    }

    /// Preformatted block with an optional class.
    pub fn pre(&mut self, text: &str, class: &str) -> &mut Node {
        self.add(Node::new("pre").with_class(class).with_text(text))
    }

    pub fn p(&mut self, text: &str) -> &mut Node {
        self.add(Node::new("p").with_text(text))
    }

    /// `<div>` with custom id and inline style.
    pub fn div(&mut self, id: &str, style: &str, text: &str) -> &mut Node {
        self.add(Node::new("div").with_id(id).with_style(style).with_text(text))
    }

    /// Boxed container (`div.box`).
    pub fn boxed(&mut self) -> &mut Node {
        self.add(Node::new("div").with_class("box"))
    }

    /// Two column layout; returns both columns.
    ///
    /// ```
    /// use embgui_dom::Node;
    ///
    /// let mut page = Node::new("main");
    /// let (left, right) = page.two_columns();
    /// left.p("hello");
    /// right.p("world");
    ///
    /// assert_eq!(
    ///     page.render(),
    ///     "<main><div class='columns'><div class='column'><p>hello</p></div>\
    ///      <div class='column'><p>world</p></div></div></main>"
    /// );
    /// ```
    pub fn two_columns(&mut self) -> (&mut Node, &mut Node) {
        let columns = self.add(Node::new("div").with_class("columns"));
        columns.add(Node::new("div").with_class("column"));
        columns.add(Node::new("div").with_class("column"));

        let (left, right) = columns.children_mut().split_at_mut(1);
        (&mut left[0], &mut right[0])
    }

    /// Row of dashboard tiles; returns the ancestor tile.
    pub fn tiles(&mut self, tiles: &[Tile]) -> &mut Node {
        let ancestor = self.add(Node::new("div").with_class("tile is-ancestor"));
        for tile in tiles {
            let article = ancestor
                .add(Node::new("div").with_class("tile is-parent"))
                .add(Node::new("article").with_class("tile is-child box"));
            article.add(Node::new("p").with_class("title").with_text(&tile.title));
            article.add(
                Node::new("p")
                    .with_class("subtitle")
                    .with_text(&tile.subtitle),
            );
        }
        ancestor
    }

    pub fn a(&mut self, text: &str, href: &str) -> &mut Node {
        self.add(Node::new("a").with_href(href).with_text(text))
    }

    /// Button group container.
    pub fn buttons(&mut self) -> &mut Node {
        self.add(Node::new("div").with_class("buttons"))
    }

    /// Link styled as a button.
    pub fn link_button(&mut self, text: &str, href: &str) -> &mut Node {
        self.add(link_button(text, href, "button is-link"))
    }

    /// Small link button, suited to table cells.
    pub fn mini_link_button(&mut self, text: &str, href: &str) -> &mut Node {
        self.add(link_button(text, href, "button is-link is-small"))
    }

    /// Button posting an empty form to `action`; returns the form.
    pub fn action_button(&mut self, text: &str, action: &str) -> &mut Node {
        self.add(post_form(action, text, "button is-primary", false))
    }

    pub fn mini_action_button(&mut self, text: &str, action: &str) -> &mut Node {
        self.add(post_form(action, text, "button is-primary is-small", false))
    }

    /// Delete button: a POST form carrying a hidden `_method=DELETE` field.
    pub fn del_button(&mut self, text: &str, action: &str) -> &mut Node {
        self.add(post_form(action, text, "button is-danger", true))
    }

    pub fn mini_del_button(&mut self, text: &str, action: &str) -> &mut Node {
        self.add(post_form(action, text, "button is-danger is-small", true))
    }

    /// Colored message box; returns the message body.
    pub fn message(&mut self, text: &str, color: &str) -> &mut Node {
        self.add(Node::new("div").with_class(format!("message {color}")))
            .add(Node::new("div").with_class("message-body").with_text(text))
    }

    /// Table with a header row; returns the `<tbody>` for adding rows.
    ///
    /// ```
    /// use embgui_dom::Node;
    ///
    /// let mut page = Node::new("main");
    /// let body = page.table_body(&["id", "name"]);
    /// let row = body.tr();
    /// row.td("1");
    /// row.td("john");
    ///
    /// assert_eq!(body.render(), "<tbody><tr><td>1</td><td>john</td></tr></tbody>");
    /// ```
    pub fn table_body(&mut self, headers: &[&str]) -> &mut Node {
        let table =
            self.add(Node::new("table").with_class("table is-narrow is-hoverable is-fullwidth"));
        let head_row = table.add(Node::new("thead")).add(Node::new("tr"));
        for header in headers {
            head_row.add(Node::new("th").with_text(*header));
        }
        table.add(Node::new("tbody"))
    }

    pub fn tr(&mut self) -> &mut Node {
        self.add(Node::new("tr"))
    }

    pub fn td(&mut self, text: &str) -> &mut Node {
        self.add(Node::new("td").with_text(text))
    }

    pub fn ul(&mut self) -> &mut Node {
        self.add(Node::new("ul"))
    }

    pub fn li(&mut self, text: &str) -> &mut Node {
        self.add(Node::new("li").with_text(text))
    }

    pub fn form(&mut self, action: &str, method: &str) -> &mut Node {
        self.add(Node::new("form").with_action(action).with_method(method))
    }

    /// Labelled text input; returns the field wrapper.
    ///
    /// With `hide_label` the label becomes the input placeholder instead.
    pub fn form_input(
        &mut self,
        label: &str,
        hide_label: bool,
        name: &str,
        value: &str,
    ) -> &mut Node {
        let field = self.add(Node::new("div").with_class("field"));
        let input = Node::new("input")
            .with_type("text")
            .with_class("input")
            .with_name(name)
            .with_value(value);
        let input = if hide_label {
            input.with_placeholder(label)
        } else {
            field.add(Node::new("label").with_class("label").with_text(label));
            input
        };
        field
            .add(Node::new("div").with_class("control"))
            .add(input);
        field
    }

    /// Multipart upload form with a single file input; returns the form.
    pub fn file_upload(&mut self, action: &str, label: &str, name: &str) -> &mut Node {
        let form = self.add(
            Node::new("form")
                .with_action(action)
                .with_method("POST")
                .with_enctype("multipart/form-data"),
        );
        let field = form.add(Node::new("div").with_class("field"));
        field.add(Node::new("label").with_class("label").with_text(label));
        field.add(Node::new("div").with_class("control")).add(
            Node::new("input")
                .with_type("file")
                .with_class("input")
                .with_name(name),
        );
        form
    }

    /// Submit button for a form; returns the button.
    pub fn form_button(&mut self, text: &str) -> &mut Node {
        self.add(Node::new("div").with_class("control")).add(
            Node::new("button")
                .with_type("submit")
                .with_class("button")
                .with_text(text),
        )
    }

    /// Textarea wrapped in a form field; returns the textarea.
    pub fn form_text_area(&mut self, name: &str, rows: u32, text: &str) -> &mut Node {
        self.add(Node::new("div").with_class("field")).add(
            Node::new("textarea")
                .with_class("textarea")
                .with_name(name)
                .with_rows(rows)
                .with_text(text),
        )
    }

    /// GET form submitting a `search` parameter to `action`; returns the form.
    pub fn search_form(&mut self, action: &str, value: &str) -> &mut Node {
        let form = self.add(Node::new("form").with_action(action).with_method("GET"));
        let wrapper = form.add(Node::new("div").with_class("field has-addons"));
        wrapper.add(Node::new("div").with_class("control")).add(
            Node::new("input")
                .with_type("text")
                .with_class("input")
                .with_name("search")
                .with_value(value),
        );
        wrapper.add(Node::new("div").with_class("control")).add(
            Node::new("button")
                .with_type("submit")
                .with_class("button is-info")
                .with_text("Search"),
        );
        form
    }

    /// `<div>` holding unescaped markup.
    pub fn raw_html(&mut self, html: &str) -> &mut Node {
        self.add(Node::new("div").with_text(html).with_raw(true))
    }

    pub fn hr(&mut self) -> &mut Node {
        self.add(Node::new("hr").with_class("hr"))
    }
}

fn link_button(text: &str, href: &str, class: &str) -> Node {
    Node::new("a")
        .with_class(class)
        .with_href(href)
        .with_style(BUTTON_STYLE)
        .with_text(text)
}

fn post_form(action: &str, text: &str, class: &str, delete: bool) -> Node {
    let mut form = Node::new("form").with_action(action).with_method("POST");
    if delete {
        form.add(
            Node::new("input")
                .with_type("hidden")
                .with_name("_method")
                .with_value("DELETE"),
        );
    }
    form.add(
        Node::new("button")
            .with_type("submit")
            .with_class(class)
            .with_style(BUTTON_STYLE)
            .with_text(text),
    );
    form
}

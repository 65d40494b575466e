//! Demo pages.
//!
//! Builders for the pages served by the demo server, also used by
//! `embgui render` to print a page without starting the server.

use std::sync::Arc;

use embgui_dom::{Node, PageConfig, RenderError, Tile};

/// Menu entry highlighted on the catalogue page.
pub const HELLO: &str = "Hello";

/// Menu entry highlighted on the dashboard page.
pub const WORLD: &str = "World";

const LOREM: &str = "Maecenas risus quam, ultricies eget ipsum convallis, pellentesque commodo \
                     sapien. Mauris orci ligula, pharetra vitae tincidunt ut, laoreet vitae ligula.";

/// Demo page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoPage {
    /// Catalogue of every convenience constructor.
    Hello,
    /// Dashboard tiles.
    World,
}

/// Build the catalogue page under `page`.
pub fn build_hello(page: &mut Node) {
    page.h1("Hello 1");
    page.h2("Hello 2");
    page.h3("Hello 3");
    page.h4("Hello 4");
    page.h5("Hello 5");
    page.hr();

    page.p("paragraph with <i>html</i>").raw = true;
    page.raw_html("<strong>hello raw HTML</strong>");
    page.hr();
    page.pre("<p>some code</p>", "");
    page.hr();
    page.div("somediv", "", "hello");
    page.hr();

    page.link_button("LinkButton", "/docs");
    page.mini_link_button("MiniLinkButton", "/docs");
    page.action_button("PostButton", "/path");

    let (left, right) = page.two_columns();
    left.p(LOREM);
    right.p(LOREM);

    let table = page.table_body(&["name", "surname", "action"]);
    let row = table.tr();
    row.td("hello");
    row.td("world");
    row.td("").mini_link_button("Inspect", "#");
    let row = table.tr();
    row.td("john");
    row.td("smith");
    row.td("").mini_del_button("Delete", "/users/john");

    let list = page.ul();
    list.li("abc 1");
    list.li("abc 2");

    page.message("Something went wrong!", "is-danger");
    page.message("OK!", "is-success");

    let form = page.form("/newuser", "POST");
    form.form_input("First Name", false, "first_name", "");
    form.form_input("Last Name", true, "last_name", "");
    form.form_text_area("desc", 10, "some text");
    form.form_button("Send");
    page.hr();

    page.file_upload("/upload", "Attachment", "attachment");
    page.hr();

    page.h5("Inline buttons");
    let buttons = page.buttons();
    buttons.mini_link_button("mini link", "#");
    buttons.mini_del_button("mini del", "#");
    buttons.mini_action_button("mini action", "#");
    buttons.del_button("del", "#");
    page.hr();

    page.boxed().a("A link in a box", "/world");
    page.search_form("/search", "somevalue");
}

/// Build the dashboard page under `page`.
pub fn build_world(page: &mut Node) {
    page.h1("World!");
    page.tiles(&[
        Tile::new("7", "new users"),
        Tile::new("71", "new sales"),
        Tile::new("90%", "CPU usage"),
        Tile::new("71%", "disk free"),
    ]);
}

/// Mint a root from `config` and render the selected demo page.
///
/// # Errors
///
/// Propagates [`RenderError`] from page rendering.
pub fn render(config: &Arc<PageConfig>, which: DemoPage) -> Result<String, RenderError> {
    let page = match which {
        DemoPage::Hello => {
            let mut page = config.new_root(HELLO);
            build_hello(&mut page);
            page
        }
        DemoPage::World => {
            let mut page = config.new_root(WORLD);
            build_world(&mut page);
            page
        }
    };
    page.render_page()
}

#[cfg(test)]
mod tests {
    use embgui_dom::MenuItem;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> Arc<PageConfig> {
        Arc::new(PageConfig::new(
            "DEMO",
            "/app.css",
            vec![MenuItem::new(HELLO, "/"), MenuItem::new(WORLD, "/world")],
        ))
    }

    #[test]
    fn test_hello_page_keeps_raw_and_escaped_text_apart() {
        let html = render(&config(), DemoPage::Hello).unwrap();

        assert!(html.contains("<p>paragraph with <i>html</i></p>"));
        assert!(html.contains("<div><strong>hello raw HTML</strong></div>"));
        assert!(html.contains("<pre>&lt;p&gt;some code&lt;/p&gt;</pre>"));
    }

    #[test]
    fn test_hello_page_columns_are_independent() {
        let mut page = config().new_root(HELLO);
        build_hello(&mut page);

        let columns = page
            .children()
            .iter()
            .find(|c| c.attrs.class.as_deref() == Some("columns"))
            .unwrap();
        assert_eq!(columns.children().len(), 2);
        for column in columns.children() {
            assert_eq!(column.children().len(), 1);
            assert_eq!(column.children()[0].tag, "p");
        }
    }

    fn collect_form_targets<'a>(node: &'a Node, out: &mut Vec<(&'a str, &'a str)>) {
        if node.tag == "form" {
            out.push((
                node.attrs.method.as_deref().unwrap_or(""),
                node.attrs.action.as_deref().unwrap_or(""),
            ));
        }
        for child in node.children() {
            collect_form_targets(child, out);
        }
    }

    #[test]
    fn test_hello_page_form_targets() {
        let mut page = config().new_root(HELLO);
        build_hello(&mut page);

        let mut targets = Vec::new();
        collect_form_targets(&page, &mut targets);

        assert_eq!(
            targets,
            vec![
                ("POST", "/path"),
                ("POST", "/users/john"),
                ("POST", "/newuser"),
                ("POST", "/upload"),
                ("POST", "#"),
                ("POST", "#"),
                ("POST", "#"),
                ("GET", "/search"),
            ]
        );
    }

    #[test]
    fn test_world_page() {
        let html = render(&config(), DemoPage::World).unwrap();

        assert!(html.contains("<h1 class='title is-1'>World!</h1>"));
        assert!(html.contains("<p class='title'>71%</p><p class='subtitle'>disk free</p>"));
        assert!(html.contains(r#"<a class="navbar-item is-active" href="/world">World</a>"#));
    }
}

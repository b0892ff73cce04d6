use pulldown_cmark::{Event, Options, Parser, html};

/// Renders profile markdown to an HTML fragment.
///
/// Raw HTML in the source is escaped rather than passed through, so profile text can
/// never inject markup into the page.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_and_emphasis_render() {
        let html = render_markdown("Hello **world**.\n\nSecond *para*.");
        assert_eq!(
            html,
            "<p>Hello <strong>world</strong>.</p>\n<p>Second <em>para</em>.</p>\n"
        );
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_source_renders_nothing() {
        assert_eq!(render_markdown(""), "");
    }
}

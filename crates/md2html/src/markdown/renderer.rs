//! Markdown to HTML rendering on top of pulldown-cmark

use pulldown_cmark::{
    html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, TextMergeStream,
};
use tracing::{debug, span, trace, Level};

use super::emoji::{self, Segment};
use crate::core::{ConvertError, Extension, Renderer};

/// Renders Markdown with a fixed set of [`Extension`]s
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    extensions: Vec<Extension>,
}

impl MarkdownRenderer {
    /// Renderer with [`Extension::DEFAULT`]
    pub fn new() -> Self {
        Self::with_extensions(Extension::DEFAULT)
    }

    pub fn with_extensions(extensions: &[Extension]) -> Self {
        Self {
            extensions: extensions.to_vec(),
        }
    }

    fn has(&self, extension: Extension) -> bool {
        self.extensions.contains(&extension)
    }

    fn options(&self) -> Options {
        let mut options = Options::empty();
        if self.has(Extension::Tables) {
            options.insert(Options::ENABLE_TABLES);
        }
        options
    }

    /// Render `input` to an HTML fragment
    pub fn to_html(&self, input: &str) -> String {
        let render_span = span!(Level::DEBUG, "render_markdown", input_len = input.len());
        let _enter = render_span.enter();
        trace!(
            extensions = ?self.extensions.iter().map(Extension::name).collect::<Vec<_>>(),
            "Rendering"
        );

        let fenced = self.has(Extension::FencedCode);
        let emoji = self.has(Extension::Emoji);

        let mut events = Vec::new();
        // Text inside these is never scanned for shortcodes
        let mut code_depth = 0usize;
        let mut image_depth = 0usize;

        for event in TextMergeStream::new(Parser::new_ext(input, self.options())) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_depth += 1;
                    let kind = match kind {
                        CodeBlockKind::Fenced(_) if !fenced => CodeBlockKind::Indented,
                        kind => kind,
                    };
                    events.push(Event::Start(Tag::CodeBlock(kind)));
                }
                Event::End(TagEnd::CodeBlock) => {
                    code_depth = code_depth.saturating_sub(1);
                    events.push(Event::End(TagEnd::CodeBlock));
                }
                Event::Start(tag @ Tag::Image { .. }) => {
                    image_depth += 1;
                    events.push(Event::Start(tag));
                }
                Event::End(TagEnd::Image) => {
                    image_depth = image_depth.saturating_sub(1);
                    events.push(Event::End(TagEnd::Image));
                }
                Event::Text(text) if emoji && code_depth == 0 && image_depth == 0 => {
                    push_with_emoji(&mut events, &text);
                }
                other => events.push(other),
            }
        }
        trace!(event_count = events.len(), "Collected events");

        let mut output = String::with_capacity(input.len() * 3 / 2);
        html::push_html(&mut output, events.into_iter());
        debug!(output_len = output.len(), "Rendered HTML");
        output
    }
}

/// Push `text` as events, with known shortcodes turned into inline images
fn push_with_emoji(events: &mut Vec<Event<'_>>, text: &str) {
    for segment in emoji::split_shortcodes(text) {
        let event = match segment {
            Segment::Text(literal) => Event::Text(CowStr::from(literal.to_string())),
            Segment::Shortcode(name) => match emoji::image_tag(name) {
                Some(tag) => Event::InlineHtml(CowStr::from(tag)),
                None => Event::Text(CowStr::from(format!(":{}:", name))),
            },
        };
        events.push(event);
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, input: &str) -> Result<String, ConvertError> {
        Ok(self.to_html(input))
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        MarkdownRenderer::new().to_html(input)
    }

    #[test]
    fn test_heading() {
        assert!(render("# Title").contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_table_shape() {
        let html = render("| a | b | c |\n|---|---|---|\n| 1 | 2 | 3 |\n| 4 | 5 | 6 |\n");
        assert_eq!(html.matches("<table>").count(), 1);
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<th>").count(), 3);
        assert_eq!(html.matches("<td>").count(), 6);
    }

    #[test]
    fn test_tables_disabled() {
        let renderer = MarkdownRenderer::with_extensions(&[Extension::FencedCode]);
        let html = renderer.to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_fenced_code_is_not_interpreted() {
        let html = render("```\n# not a heading\n*not emphasis*\n```\n");
        assert!(html.contains("<pre><code># not a heading\n*not emphasis*\n</code></pre>"));
        assert!(!html.contains("<h1>"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn test_fenced_code_language_class() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains(r#"<code class="language-rust">"#));
    }

    #[test]
    fn test_fenced_code_disabled_drops_language() {
        let renderer = MarkdownRenderer::with_extensions(&[Extension::Tables]);
        let html = renderer.to_html("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre><code>fn main() {}"));
        assert!(!html.contains("language-rust"));
    }

    #[test]
    fn test_emoji_in_paragraph() {
        let html = render("Hello :smile:");
        assert!(html.contains("<p>Hello <img "));
        assert!(html.contains("1f604.svg"));
    }

    #[test]
    fn test_unknown_shortcode_is_literal() {
        let html = render("Hello :not_an_emoji_at_all:");
        assert!(html.contains("<p>Hello :not_an_emoji_at_all:</p>"));
    }

    #[test]
    fn test_emoji_untouched_in_code() {
        let html = render("`:smile:`\n\n```\n:smile:\n```\n");
        assert!(!html.contains("<img"));
        assert!(html.contains("<code>:smile:</code>"));
    }

    #[test]
    fn test_emoji_untouched_in_image_alt() {
        let html = render("![a :smile: face](face.png)");
        assert!(html.contains(r#"alt="a :smile: face""#));
        assert!(!html.contains("1f604.svg"));
    }

    #[test]
    fn test_emoji_disabled() {
        let renderer = MarkdownRenderer::with_extensions(&[Extension::Tables, Extension::FencedCode]);
        assert!(renderer.to_html(":smile:").contains("<p>:smile:</p>"));
    }

    #[test]
    fn test_text_around_emoji_is_escaped() {
        let html = render("a < b :smile:");
        assert!(html.contains("a &lt; b <img"));
    }

    #[test]
    fn test_emoji_inside_emphasis_with_underscores() {
        let html = render("*:white_check_mark: done*");
        assert!(html.contains("<em><img "));
        assert!(html.contains("2705.svg"));
    }
}

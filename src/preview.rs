//! Rendering of the `output` field's markup
//!
//! Outputs may mix Markdown and inline HTML. The terminal view gets a plain
//! text rendering; the browser preview gets a standalone HTML document.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render output markup to a complete HTML document
pub fn output_to_html(output: &str) -> String {
    let parser = Parser::new_ext(output, parser_options());
    let mut body = String::new();
    html::push_html(&mut body, parser);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Output preview</title>
    <style>{}</style>
</head>
<body>
{}
</body>
</html>"#,
        PREVIEW_CSS, body
    )
}

const PREVIEW_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 14px;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
}
pre {
    background: #f6f8fa;
    padding: 12px;
    overflow-x: auto;
}
"#;

/// Render output markup to plain text for the terminal
///
/// Headings keep their `#` prefix, list items get bullets or numbers, code
/// blocks are indented and HTML tags are dropped.
pub fn output_to_text(output: &str) -> String {
    let mut text = String::new();
    // One entry per open list: next number for ordered lists
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut in_code_block = false;

    for event in Parser::new_ext(output, parser_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                block_break(&mut text);
                text.push_str(&"#".repeat(level as usize));
                text.push(' ');
            }
            Event::Start(Tag::Paragraph) => {
                if lists.is_empty() {
                    block_break(&mut text);
                }
            }
            Event::Start(Tag::List(start)) => {
                if lists.is_empty() {
                    block_break(&mut text);
                }
                lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
            }
            Event::Start(Tag::Item) => {
                line_break(&mut text);
                text.push_str(&"  ".repeat(lists.len().saturating_sub(1)));
                match lists.last_mut() {
                    Some(Some(n)) => {
                        text.push_str(&format!("{}. ", n));
                        *n += 1;
                    }
                    _ => text.push_str("- "),
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                block_break(&mut text);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
            }
            Event::Text(t) if in_code_block => {
                for line in t.lines() {
                    line_break(&mut text);
                    text.push_str("    ");
                    text.push_str(line);
                }
            }
            Event::Text(t) => text.push_str(&t),
            Event::Code(t) => {
                text.push('`');
                text.push_str(&t);
                text.push('`');
            }
            Event::Html(t) | Event::InlineHtml(t) => text.push_str(&strip_tags(&t)),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak => text.push('\n'),
            Event::Rule => {
                block_break(&mut text);
                text.push_str("----");
            }
            Event::TaskListMarker(done) => text.push_str(if done { "[x] " } else { "[ ] " }),
            _ => {}
        }
    }

    text.trim_start_matches('\n').trim_end().to_string()
}

/// Start a new line unless already at one
fn line_break(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}

/// Separate blocks with one blank line
fn block_break(text: &mut String) {
    if text.is_empty() {
        return;
    }
    line_break(text);
    if !text.ends_with("\n\n") {
        text.push('\n');
    }
}

/// Drop `<...>` tags and decode the common entities
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

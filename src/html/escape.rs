use std::io::{self, Write};

use pulldown_cmark_escape::{escape_html, escape_html_body_text, IoWriter};

/// Context-aware text encoding for markup output.
pub trait Escaper {
    /// Writes `text` for use as element content.
    fn write_text(&self, out: &mut dyn Write, text: &str) -> io::Result<()>;

    /// Writes `text` for use inside a double-quoted attribute value.
    fn write_attribute(&self, out: &mut dyn Write, text: &str) -> io::Result<()>;
}

/// Escapes `&`, `<` and `>` in content, and additionally `"` in attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct XhtmlEscaper;

impl Escaper for XhtmlEscaper {
    fn write_text(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        escape_html_body_text(IoWriter(out), text)
    }

    fn write_attribute(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        escape_html(IoWriter(out), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> String {
        let mut buf = Vec::new();
        XhtmlEscaper.write_text(&mut buf, s).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn attribute(s: &str) -> String {
        let mut buf = Vec::new();
        XhtmlEscaper.write_attribute(&mut buf, s).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_escapes_markup_characters() {
        assert_eq!(text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn text_leaves_plain_strings_alone() {
        assert_eq!(text("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn attribute_escapes_quotes() {
        assert_eq!(attribute(r#"x" onclick="y"#), "x&quot; onclick=&quot;y");
    }

    #[test]
    fn attribute_escapes_angle_brackets() {
        assert_eq!(attribute("<script>"), "&lt;script&gt;");
    }
}

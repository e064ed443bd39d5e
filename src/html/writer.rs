use std::borrow::Cow;
use std::io::{self, Write};

use super::body::BodyWriter;
use super::escape::Escaper;
use crate::model::Contact;

struct Attr<'v> {
    name: &'static str,
    prefix: &'static str,
    value: Cow<'v, str>,
}

/// A start tag under construction. Attribute values are escaped when the
/// tag is written; attributes appear in the order they were added.
pub struct Tag<'v> {
    name: &'static str,
    attrs: Vec<Attr<'v>>,
}

impl<'v> Tag<'v> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn attr(self, name: &'static str, value: impl Into<Cow<'v, str>>) -> Self {
        self.prefixed_attr(name, "", value)
    }

    /// Adds an attribute whose value starts with a fixed, trusted `prefix`.
    /// Only `value` goes through the escaper.
    pub fn prefixed_attr(
        mut self,
        name: &'static str,
        prefix: &'static str,
        value: impl Into<Cow<'v, str>>,
    ) -> Self {
        self.attrs.push(Attr {
            name,
            prefix,
            value: value.into(),
        });
        self
    }

    pub fn id(self, id: impl Into<Cow<'v, str>>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<Cow<'v, str>>) -> Self {
        self.attr("class", class)
    }

    pub fn style(self, style: impl Into<Cow<'v, str>>) -> Self {
        self.attr("style", style)
    }

    pub fn href(self, href: impl Into<Cow<'v, str>>) -> Self {
        self.attr("href", href)
    }

    /// `href="{scheme}{target}"`, e.g. `mailto:` or `tel:` links.
    pub fn href_with_scheme(self, scheme: &'static str, target: impl Into<Cow<'v, str>>) -> Self {
        self.prefixed_attr("href", scheme, target)
    }

    pub fn colspan(self, columns: u32) -> Self {
        self.attr("colspan", columns.to_string())
    }
}

impl From<&'static str> for Tag<'_> {
    fn from(name: &'static str) -> Self {
        Tag::new(name)
    }
}

/// Forward-only markup writer. Every call writes straight through to the
/// sink; if a write fails, whatever was already written stays written.
pub struct HtmlWriter<'e, W: Write> {
    out: W,
    escaper: &'e dyn Escaper,
}

impl<'e, W: Write> HtmlWriter<'e, W> {
    pub fn new(out: W, escaper: &'e dyn Escaper) -> Self {
        Self { out, escaper }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes trusted markup without escaping.
    pub fn raw(&mut self, markup: &str) -> io::Result<&mut Self> {
        self.out.write_all(markup.as_bytes())?;
        Ok(self)
    }

    pub fn nl(&mut self) -> io::Result<&mut Self> {
        self.raw("\n")
    }

    /// Writes element content through the escaper.
    pub fn text(&mut self, text: &str) -> io::Result<&mut Self> {
        self.escaper.write_text(&mut self.out, text)?;
        Ok(self)
    }

    pub fn open<'v>(&mut self, tag: impl Into<Tag<'v>>) -> io::Result<&mut Self> {
        let tag = tag.into();
        self.out.write_all(b"<")?;
        self.out.write_all(tag.name.as_bytes())?;
        for attr in &tag.attrs {
            self.out.write_all(b" ")?;
            self.out.write_all(attr.name.as_bytes())?;
            self.out.write_all(b"=\"")?;
            self.out.write_all(attr.prefix.as_bytes())?;
            self.escaper.write_attribute(&mut self.out, &attr.value)?;
            self.out.write_all(b"\"")?;
        }
        self.out.write_all(b">")?;
        Ok(self)
    }

    pub fn close(&mut self, name: &str) -> io::Result<&mut Self> {
        self.out.write_all(b"</")?;
        self.out.write_all(name.as_bytes())?;
        self.out.write_all(b">")?;
        Ok(self)
    }

    /// An element holding only escaped text.
    pub fn element<'v>(&mut self, tag: impl Into<Tag<'v>>, text: &str) -> io::Result<&mut Self> {
        let tag = tag.into();
        let name = tag.name;
        self.open(tag)?.text(text)?.close(name)
    }

    /// Hands the sink to `writer` for the contact's body, unescaped.
    pub fn body(&mut self, writer: &dyn BodyWriter, contact: &Contact) -> io::Result<&mut Self> {
        writer.write_body(contact, &mut self.out)?;
        Ok(self)
    }
}

use std::io::Write;

use log::debug;

use crate::error::{RenderError, RenderResult};
use crate::html::{
    BodyWriter, Escaper, HtmlWriter, IdResolver, SinglePage, Tag, VerbatimBody, XhtmlEscaper,
};
use crate::model::{Address, Contact, Email, Im, PhoneNumber};
use crate::render::label::{LabelProvider, NameLabel};

pub const TABLE_CLASS: &str = "ao-grid pragmatickm-contact";
pub const EMAIL_CLASS: &str = "pragmatickm-contact-email";
pub const WEB_PAGE_CLASS: &str = "pragmatickm-contact-web-page";
pub const BODY_CLASS: &str = "pragmatickm-contact-body";

/// The collaborators a contact table is rendered with.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub ids: &'a dyn IdResolver,
    pub escaper: &'a dyn Escaper,
    pub body: &'a dyn BodyWriter,
    pub labels: &'a dyn LabelProvider,
}

impl<'a> RenderContext<'a> {
    pub fn new() -> Self {
        Self {
            ids: &SinglePage,
            escaper: &XhtmlEscaper,
            body: &VerbatimBody,
            labels: &NameLabel,
        }
    }

    pub fn with_ids(mut self, ids: &'a dyn IdResolver) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_escaper(mut self, escaper: &'a dyn Escaper) -> Self {
        self.escaper = escaper;
        self
    }

    pub fn with_body(mut self, body: &'a dyn BodyWriter) -> Self {
        self.body = body;
        self
    }

    pub fn with_labels(mut self, labels: &'a dyn LabelProvider) -> Self {
        self.labels = labels;
        self
    }
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the label header row is shown.
///
/// A contact made of nothing but addresses is shown without a header, so it
/// can be used as an address block. A contact with no addresses at all
/// always gets the header, even when every other field is empty.
pub fn shows_header(contact: &Contact) -> bool {
    contact.has_name_fields() || contact.has_contact_methods() || contact.addresses.is_empty()
}

/// Writes `contact` as a single `<table>` element.
///
/// Output is streamed; on an I/O error the partial table already written is
/// left in `out` and the error is returned as [`RenderError::Io`].
pub fn write_contact_table<W: Write + ?Sized>(
    ctx: &RenderContext<'_>,
    out: &mut W,
    style: Option<&str>,
    contact: &Contact,
) -> RenderResult<()> {
    let header = shows_header(contact);
    debug!(
        "rendering contact {} on {}: header={}, emails={}, phones={}, ims={}, web_pages={}, addresses={}, body={}B",
        contact.id,
        contact.page,
        header,
        contact.emails.len(),
        contact.phone_numbers.len(),
        contact.ims.len(),
        contact.web_pages.len(),
        contact.addresses.len(),
        contact.body.len(),
    );

    let mut html = HtmlWriter::new(out, ctx.escaper);

    let id = ctx.ids.resolve_id(&contact.page, &contact.id);
    let mut table = Tag::new("table").id(id).class(TABLE_CLASS);
    if let Some(style) = style {
        table = table.style(style);
    }
    html.open(table)?.nl()?;

    if header {
        let label = ctx.labels.label(contact);
        html.open("thead")?
            .open("tr")?
            .open(Tag::new("th").colspan(3))?
            .element("div", &label)?
            .close("th")?
            .close("tr")?
            .close("thead")?
            .nl()?;
    }

    html.open("tbody")?.nl()?;
    for (label, value) in contact.name_fields() {
        write_row(&mut html, label, value)?;
    }
    for email in &contact.emails {
        write_email(&mut html, email)?;
    }
    for phone in &contact.phone_numbers {
        write_phone(&mut html, phone)?;
    }
    for im in &contact.ims {
        write_im(&mut html, im)?;
    }
    for web_page in &contact.web_pages {
        write_web_page(&mut html, web_page)?;
    }
    for address in &contact.addresses {
        write_address(&mut html, address)?;
    }
    if !contact.body.is_empty() {
        html.open("tr")?
            .open(Tag::new("td").class(BODY_CLASS).colspan(3))?
            .body(ctx.body, contact)?
            .close("td")?
            .close("tr")?
            .nl()?;
    }
    html.close("tbody")?.nl()?.close("table")?;
    Ok(())
}

/// Renders `contact` into a new string.
pub fn render_contact_table(
    ctx: &RenderContext<'_>,
    style: Option<&str>,
    contact: &Contact,
) -> RenderResult<String> {
    let mut buf = Vec::new();
    write_contact_table(ctx, &mut buf, style, contact)?;
    String::from_utf8(buf).map_err(|e| RenderError::Other(e.to_string()))
}

/// Writes each contact's table in turn, separated by newlines.
pub fn write_contact_tables<W: Write + ?Sized>(
    ctx: &RenderContext<'_>,
    out: &mut W,
    style: Option<&str>,
    contacts: &[Contact],
) -> RenderResult<()> {
    for (i, contact) in contacts.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        write_contact_table(ctx, out, style, contact)?;
    }
    Ok(())
}

fn write_row<W: Write>(
    html: &mut HtmlWriter<'_, W>,
    header: &str,
    value: Option<&str>,
) -> RenderResult<()> {
    if let Some(value) = value {
        html.open("tr")?
            .element("th", header)?
            .element(Tag::new("td").colspan(2), value)?
            .close("tr")?
            .nl()?;
    }
    Ok(())
}

fn write_email<W: Write>(html: &mut HtmlWriter<'_, W>, email: &Email) -> RenderResult<()> {
    let address = email.as_str();
    html.open("tr")?
        .element("th", "Email:")?
        .open(Tag::new("td").colspan(2))?
        .open(Tag::new("div").class(EMAIL_CLASS))?
        .element(Tag::new("a").href_with_scheme("mailto:", address), address)?
        .close("div")?
        .close("td")?
        .close("tr")?
        .nl()?;
    Ok(())
}

/// The value cell spans both remaining columns unless a comment takes the last.
fn value_cell(comment: Option<&str>) -> Tag<'static> {
    match comment {
        Some(_) => Tag::new("td"),
        None => Tag::new("td").colspan(2),
    }
}

fn write_comment_cell<W: Write>(
    html: &mut HtmlWriter<'_, W>,
    comment: Option<&str>,
) -> RenderResult<()> {
    if let Some(comment) = comment {
        html.element("td", comment)?;
    }
    Ok(())
}

fn write_phone<W: Write>(html: &mut HtmlWriter<'_, W>, phone: &PhoneNumber) -> RenderResult<()> {
    let phone_type = phone.phone_type;
    let comment = phone.comment.as_deref();
    html.open("tr")?
        .element("th", &format!("{}:", phone_type.label()))?
        .open(value_cell(comment))?
        .open(Tag::new("div").class(phone_type.css_class()))?
        .element(
            Tag::new("a").href_with_scheme("tel:", phone.dial_string()),
            &phone.number,
        )?
        .close("div")?
        .close("td")?;
    write_comment_cell(html, comment)?;
    html.close("tr")?.nl()?;
    Ok(())
}

fn write_im<W: Write>(html: &mut HtmlWriter<'_, W>, im: &Im) -> RenderResult<()> {
    let im_type = im.im_type;
    let comment = im.comment.as_deref();
    html.open("tr")?
        .element("th", &format!("{}:", im_type.label()))?
        .open(value_cell(comment))?
        .element(Tag::new("div").class(im_type.css_class()), &im.handle)?
        .close("td")?;
    write_comment_cell(html, comment)?;
    html.close("tr")?.nl()?;
    Ok(())
}

fn write_web_page<W: Write>(html: &mut HtmlWriter<'_, W>, url: &str) -> RenderResult<()> {
    html.open("tr")?
        .element("th", "Web Page:")?
        .open(Tag::new("td").colspan(2))?
        .open(Tag::new("div").class(WEB_PAGE_CLASS))?
        .element(Tag::new("a").href(url), url)?
        .close("div")?
        .close("td")?
        .close("tr")?
        .nl()?;
    Ok(())
}

fn write_address<W: Write>(html: &mut HtmlWriter<'_, W>, address: &Address) -> RenderResult<()> {
    let address_type = address.address_type;
    html.open("tr")?
        .open(Tag::new("th").class(address_type.css_class()).colspan(3))?
        .element("div", address_type.label())?
        .close("th")?
        .close("tr")?
        .nl()?;
    for (header, value) in address.lines() {
        write_row(html, header, value)?;
    }
    Ok(())
}

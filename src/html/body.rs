use std::io::{self, Write};

use crate::model::Contact;

/// Streams a contact's captured body markup into the output.
pub trait BodyWriter {
    fn write_body(&self, contact: &Contact, out: &mut dyn Write) -> io::Result<()>;
}

/// Writes the body exactly as captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimBody;

impl BodyWriter for VerbatimBody {
    fn write_body(&self, contact: &Contact, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(contact.body.as_str().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageRef;

    #[test]
    fn writes_markup_unescaped() {
        let mut contact = Contact::new(PageRef::new("/b", "/p.jsp"), "c");
        contact.body = "<p>Met at <b>RustConf</b> &amp; more</p>".into();
        let mut out = Vec::new();
        VerbatimBody.write_body(&contact, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<p>Met at <b>RustConf</b> &amp; more</p>"
        );
    }
}

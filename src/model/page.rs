use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the page a contact was declared on: the book it belongs to
/// and the page path within that book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRef {
    pub book: String,
    pub path: String,
}

impl PageRef {
    pub fn new(book: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.book, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_book_and_path_are_equal() {
        let a = PageRef::new("/contacts", "/index.jsp");
        let b = PageRef::new("/contacts", "/index.jsp");
        assert_eq!(a, b);
    }

    #[test]
    fn display_joins_book_and_path() {
        let page = PageRef::new("/contacts", "/people/jane.jsp");
        assert_eq!(page.to_string(), "/contacts/people/jane.jsp");
    }

    #[test]
    fn serde_roundtrip() {
        let page = PageRef::new("/b", "/p.jsp");
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"book":"/b","path":"/p.jsp"}"#);
        let back: PageRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }
}

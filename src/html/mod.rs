pub mod escape;
pub mod writer;
pub mod page_index;
pub mod body;

pub use escape::{Escaper, XhtmlEscaper};
pub use writer::{HtmlWriter, Tag};
pub use page_index::{IdResolver, PageIndex, SinglePage};
pub use body::{BodyWriter, VerbatimBody};

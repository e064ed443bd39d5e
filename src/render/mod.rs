pub mod label;
pub mod contact_table;

pub use label::{LabelProvider, NameLabel};
pub use contact_table::{
    render_contact_table, shows_header, write_contact_table, write_contact_tables, RenderContext,
};

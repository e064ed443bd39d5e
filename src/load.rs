use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::RenderResult;
use crate::model::Contact;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Contact>),
    One(Box<Contact>),
}

/// Parses a JSON document holding either one contact or an array of them.
pub fn contacts_from_str(json: &str) -> RenderResult<Vec<Contact>> {
    let contacts = match serde_json::from_str::<OneOrMany>(json)? {
        OneOrMany::Many(contacts) => contacts,
        OneOrMany::One(contact) => vec![*contact],
    };
    Ok(contacts)
}

pub fn contacts_from_path(path: &Path) -> RenderResult<Vec<Contact>> {
    let json = std::fs::read_to_string(path)?;
    let contacts = contacts_from_str(&json)?;
    debug!("loaded {} contact(s) from {}", contacts.len(), path.display());
    Ok(contacts)
}

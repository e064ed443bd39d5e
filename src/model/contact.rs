use serde::{Deserialize, Serialize};
use std::fmt;

use super::address::Address;
use super::im::Im;
use super::page::PageRef;
use super::phone::PhoneNumber;

/// An email address. Validation happens before a contact reaches this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Email {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Email {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Markup captured from the contact's body. It has already been rendered
/// and escaped upstream and is written out as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Body(String);

impl Body {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Body {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A person or organization as declared on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub page: PageRef,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maiden: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<Email>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ims: Vec<Im>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_pages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(default, skip_serializing_if = "Body::is_empty")]
    pub body: Body,
}

impl Contact {
    pub fn new(page: PageRef, id: impl Into<String>) -> Self {
        Self {
            page,
            id: id.into(),
            title: None,
            first: None,
            middle: None,
            nick: None,
            last: None,
            maiden: None,
            suffix: None,
            job_title: None,
            company: None,
            department: None,
            emails: Vec::new(),
            phone_numbers: Vec::new(),
            ims: Vec::new(),
            web_pages: Vec::new(),
            addresses: Vec::new(),
            body: Body::default(),
        }
    }

    /// Name and organization fields in display order, absent ones as `None`.
    pub fn name_fields(&self) -> [(&'static str, Option<&str>); 10] {
        [
            ("Title:", self.title.as_deref()),
            ("First:", self.first.as_deref()),
            ("Middle:", self.middle.as_deref()),
            ("Nick:", self.nick.as_deref()),
            ("Last:", self.last.as_deref()),
            ("Maiden:", self.maiden.as_deref()),
            ("Suffix:", self.suffix.as_deref()),
            ("Company:", self.company.as_deref()),
            ("Department:", self.department.as_deref()),
            ("Job Title:", self.job_title.as_deref()),
        ]
    }

    pub fn has_name_fields(&self) -> bool {
        self.name_fields().iter().any(|(_, value)| value.is_some())
    }

    /// True when the contact carries anything besides addresses and body.
    pub fn has_contact_methods(&self) -> bool {
        !self.emails.is_empty()
            || !self.phone_numbers.is_empty()
            || !self.ims.is_empty()
            || !self.web_pages.is_empty()
    }
}

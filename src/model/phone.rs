use serde::{Deserialize, Serialize};

/// The kind of telephone line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Fax,
    Home,
    Mobile,
    Work,
}

impl PhoneType {
    pub const ALL: &'static [PhoneType] = &[
        PhoneType::Fax,
        PhoneType::Home,
        PhoneType::Mobile,
        PhoneType::Work,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PhoneType::Fax => "Fax",
            PhoneType::Home => "Home",
            PhoneType::Mobile => "Mobile",
            PhoneType::Work => "Work",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PhoneType::Fax => "pragmatickm-contact-phone-fax",
            PhoneType::Home => "pragmatickm-contact-phone-home",
            PhoneType::Mobile => "pragmatickm-contact-phone-mobile",
            PhoneType::Work => "pragmatickm-contact-phone-work",
        }
    }
}

/// A phone number as entered, with its free-form formatting kept intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PhoneNumber {
    pub fn new(phone_type: PhoneType, number: impl Into<String>) -> Self {
        Self {
            phone_type,
            number: number.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The number as a `tel:` URI body: every space becomes a hyphen.
    pub fn dial_string(&self) -> String {
        self.number.replace(' ', "-")
    }
}

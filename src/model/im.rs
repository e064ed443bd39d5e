use serde::{Deserialize, Serialize};

/// Instant-messaging network a handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImType {
    Aim,
    Icq,
    Jabber,
    Msn,
    Skype,
    Yahoo,
}

impl ImType {
    pub const ALL: &'static [ImType] = &[
        ImType::Aim,
        ImType::Icq,
        ImType::Jabber,
        ImType::Msn,
        ImType::Skype,
        ImType::Yahoo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImType::Aim => "AIM",
            ImType::Icq => "ICQ",
            ImType::Jabber => "Jabber",
            ImType::Msn => "MSN",
            ImType::Skype => "Skype",
            ImType::Yahoo => "Yahoo",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ImType::Aim => "pragmatickm-contact-im-aim",
            ImType::Icq => "pragmatickm-contact-im-icq",
            ImType::Jabber => "pragmatickm-contact-im-jabber",
            ImType::Msn => "pragmatickm-contact-im-msn",
            ImType::Skype => "pragmatickm-contact-im-skype",
            ImType::Yahoo => "pragmatickm-contact-im-yahoo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Im {
    #[serde(rename = "type")]
    pub im_type: ImType,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Im {
    pub fn new(im_type: ImType, handle: impl Into<String>) -> Self {
        Self {
            im_type,
            handle: handle.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

use serde::{Deserialize, Serialize};

/// What an address is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Business,
    Home,
    Mailing,
    Other,
}

impl AddressType {
    pub const ALL: &'static [AddressType] = &[
        AddressType::Business,
        AddressType::Home,
        AddressType::Mailing,
        AddressType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AddressType::Business => "Business Address",
            AddressType::Home => "Home Address",
            AddressType::Mailing => "Mailing Address",
            AddressType::Other => "Other Address",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AddressType::Business => "pragmatickm-contact-address-business",
            AddressType::Home => "pragmatickm-contact-address-home",
            AddressType::Mailing => "pragmatickm-contact-address-mailing",
            AddressType::Other => "pragmatickm-contact-address-other",
        }
    }
}

/// A postal address. Every line is optional; missing lines are not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "type")]
    pub address_type: AddressType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_prov: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_postal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Address {
    pub fn new(address_type: AddressType) -> Self {
        Self {
            address_type,
            address1: None,
            address2: None,
            city: None,
            state_prov: None,
            zip_postal: None,
            country: None,
            comment: None,
        }
    }

    /// Label/value pairs in display order, absent lines included as `None`.
    pub fn lines(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("Address 1:", self.address1.as_deref()),
            ("Address 2:", self.address2.as_deref()),
            ("City:", self.city.as_deref()),
            ("State/Prov:", self.state_prov.as_deref()),
            ("ZIP/Postal:", self.zip_postal.as_deref()),
            ("Country:", self.country.as_deref()),
            ("Comment:", self.comment.as_deref()),
        ]
    }
}

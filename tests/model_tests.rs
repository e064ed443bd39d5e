use contact_html::model::*;

// ==========================================================================
// TYPE TAG TESTS
// ==========================================================================

#[test]
fn phone_types_have_distinct_css_classes() {
    let mut classes: Vec<&str> = PhoneType::ALL.iter().map(|t| t.css_class()).collect();
    classes.sort_unstable();
    classes.dedup();
    assert_eq!(classes.len(), PhoneType::ALL.len());
    assert!(classes.iter().all(|c| c.starts_with("pragmatickm-contact-phone-")));
}

#[test]
fn im_types_have_distinct_css_classes() {
    let mut classes: Vec<&str> = ImType::ALL.iter().map(|t| t.css_class()).collect();
    classes.sort_unstable();
    classes.dedup();
    assert_eq!(classes.len(), ImType::ALL.len());
    assert!(classes.iter().all(|c| c.starts_with("pragmatickm-contact-im-")));
}

#[test]
fn address_types_have_distinct_css_classes() {
    let mut classes: Vec<&str> = AddressType::ALL.iter().map(|t| t.css_class()).collect();
    classes.sort_unstable();
    classes.dedup();
    assert_eq!(classes.len(), AddressType::ALL.len());
    assert!(classes.iter().all(|c| c.starts_with("pragmatickm-contact-address-")));
}

#[test]
fn type_labels() {
    assert_eq!(PhoneType::Mobile.label(), "Mobile");
    assert_eq!(ImType::Aim.label(), "AIM");
    assert_eq!(AddressType::Business.label(), "Business Address");
}

#[test]
fn type_tags_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&PhoneType::Work).unwrap(), "\"work\"");
    assert_eq!(serde_json::to_string(&ImType::Skype).unwrap(), "\"skype\"");
    assert_eq!(
        serde_json::from_str::<AddressType>("\"mailing\"").unwrap(),
        AddressType::Mailing
    );
}

// ==========================================================================
// PHONE / IM TESTS
// ==========================================================================

#[test]
fn dial_string_replaces_every_space() {
    let phone = PhoneNumber::new(PhoneType::Home, "+1 251 555 0100");
    assert_eq!(phone.dial_string(), "+1-251-555-0100");
    assert_eq!(phone.number, "+1 251 555 0100");
}

#[test]
fn dial_string_keeps_other_characters() {
    let phone = PhoneNumber::new(PhoneType::Home, "(555) 123-4567 x89");
    assert_eq!(phone.dial_string(), "(555)-123-4567-x89");
}

#[test]
fn with_comment_sets_comment() {
    let phone = PhoneNumber::new(PhoneType::Work, "555").with_comment("desk");
    assert_eq!(phone.comment.as_deref(), Some("desk"));
    let im = Im::new(ImType::Msn, "jd").with_comment("unused");
    assert_eq!(im.comment.as_deref(), Some("unused"));
}

#[test]
fn phone_json_uses_type_key() {
    let phone: PhoneNumber =
        serde_json::from_str(r#"{"type": "fax", "number": "555 0000", "comment": "old"}"#).unwrap();
    assert_eq!(phone, PhoneNumber::new(PhoneType::Fax, "555 0000").with_comment("old"));
}

// ==========================================================================
// ADDRESS TESTS
// ==========================================================================

#[test]
fn address_lines_in_display_order() {
    let address = Address {
        address1: Some("1 Main St".into()),
        country: Some("US".into()),
        ..Address::new(AddressType::Home)
    };
    let lines = address.lines();
    let labels: Vec<&str> = lines.iter().map(|(l, _)| *l).collect();
    assert_eq!(
        labels,
        vec!["Address 1:", "Address 2:", "City:", "State/Prov:", "ZIP/Postal:", "Country:", "Comment:"]
    );
    assert_eq!(lines[0].1, Some("1 Main St"));
    assert_eq!(lines[1].1, None);
    assert_eq!(lines[5].1, Some("US"));
}

#[test]
fn address_json_omits_missing_lines() {
    let address = Address {
        city: Some("Putnam".into()),
        ..Address::new(AddressType::Home)
    };
    let json = serde_json::to_string(&address).unwrap();
    assert_eq!(json, r#"{"type":"home","city":"Putnam"}"#);
}

// ==========================================================================
// CONTACT TESTS
// ==========================================================================

#[test]
fn email_displays_as_text() {
    let email = Email::from("jane@x.com");
    assert_eq!(email.to_string(), "jane@x.com");
    assert_eq!(email.as_str(), "jane@x.com");
}

#[test]
fn contact_json_roundtrip() {
    let contact = Contact {
        first: Some("Jane".into()),
        emails: vec![Email::new("jane@x.com")],
        ims: vec![Im::new(ImType::Jabber, "jane@jabber.org")],
        web_pages: vec!["https://jane.example".into()],
        addresses: vec![Address::new(AddressType::Other)],
        body: Body::new("<p>hi</p>"),
        ..Contact::new(PageRef::new("/b", "/p.jsp"), "jane")
    };
    let json = serde_json::to_string(&contact).unwrap();
    let back: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(back, contact);
}

#[test]
fn contact_requires_page_and_id() {
    assert!(serde_json::from_str::<Contact>(r#"{"id": "x"}"#).is_err());
    assert!(serde_json::from_str::<Contact>(r#"{"page": {"book": "/b", "path": "/p"}}"#).is_err());
}

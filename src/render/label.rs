use crate::model::Contact;

/// Produces the human-readable label shown in a contact's table header.
pub trait LabelProvider {
    fn label(&self, contact: &Contact) -> String;
}

/// "Last, Title First Middle "Nick" Suffix (Maiden)", falling back to the
/// organization, then the first email, then the contact id.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameLabel;

impl LabelProvider for NameLabel {
    fn label(&self, contact: &Contact) -> String {
        let quoted_nick = contact.nick.as_ref().map(|n| format!("\"{}\"", n));
        let given: Vec<&str> = [
            contact.title.as_deref(),
            contact.first.as_deref(),
            contact.middle.as_deref(),
            quoted_nick.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut label = match (contact.last.as_deref(), given.is_empty()) {
            (Some(last), false) => format!("{}, {}", last, given.join(" ")),
            (Some(last), true) => last.to_string(),
            (None, false) => given.join(" "),
            (None, true) => String::new(),
        };

        if !label.is_empty() {
            if let Some(suffix) = &contact.suffix {
                label.push(' ');
                label.push_str(suffix);
            }
            if let Some(maiden) = &contact.maiden {
                label.push_str(" (");
                label.push_str(maiden);
                label.push(')');
            }
            return label;
        }

        // No personal name: describe the contact by what it does have
        contact
            .company
            .clone()
            .or_else(|| contact.department.clone())
            .or_else(|| contact.job_title.clone())
            .or_else(|| contact.emails.first().map(|e| e.to_string()))
            .unwrap_or_else(|| contact.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Email, PageRef};

    fn contact() -> Contact {
        Contact::new(PageRef::new("/b", "/p.jsp"), "c1")
    }

    #[test]
    fn last_comma_first() {
        let c = Contact {
            first: Some("Jane".into()),
            last: Some("Doe".into()),
            ..contact()
        };
        assert_eq!(NameLabel.label(&c), "Doe, Jane");
    }

    #[test]
    fn full_name_with_all_parts() {
        let c = Contact {
            title: Some("Dr.".into()),
            first: Some("Jane".into()),
            middle: Some("Q.".into()),
            nick: Some("JJ".into()),
            last: Some("Doe".into()),
            suffix: Some("PhD".into()),
            maiden: Some("Smith".into()),
            ..contact()
        };
        assert_eq!(NameLabel.label(&c), "Doe, Dr. Jane Q. \"JJ\" PhD (Smith)");
    }

    #[test]
    fn last_only() {
        let c = Contact {
            last: Some("Doe".into()),
            ..contact()
        };
        assert_eq!(NameLabel.label(&c), "Doe");
    }

    #[test]
    fn first_only() {
        let c = Contact {
            first: Some("Jane".into()),
            ..contact()
        };
        assert_eq!(NameLabel.label(&c), "Jane");
    }

    #[test]
    fn suffix_without_name_falls_back() {
        let c = Contact {
            suffix: Some("Jr.".into()),
            company: Some("Acme".into()),
            ..contact()
        };
        assert_eq!(NameLabel.label(&c), "Acme");
    }

    #[test]
    fn falls_back_to_company_then_department() {
        let c = Contact {
            department: Some("Sales".into()),
            ..contact()
        };
        assert_eq!(NameLabel.label(&c), "Sales");
    }

    #[test]
    fn falls_back_to_first_email() {
        let mut c = contact();
        c.emails.push(Email::new("a@x.com"));
        c.emails.push(Email::new("b@x.com"));
        assert_eq!(NameLabel.label(&c), "a@x.com");
    }

    #[test]
    fn falls_back_to_id() {
        assert_eq!(NameLabel.label(&contact()), "c1");
    }
}

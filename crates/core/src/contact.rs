//! Contact details printed on reports

/// Per-user contact settings shown in the report header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    /// Contact email address
    pub email: String,

    /// Primary phone number
    pub phone1: String,

    /// Secondary phone number
    pub phone2: String,

    /// Primary WhatsApp number
    pub whatsapp1: String,

    /// Secondary WhatsApp number
    pub whatsapp2: String,
}

impl ContactInfo {
    /// Both phone numbers joined for display, skipping blanks.
    pub fn phones(&self) -> String {
        join_present(&self.phone1, &self.phone2)
    }

    /// Both WhatsApp numbers joined for display, skipping blanks.
    pub fn whatsapps(&self) -> String {
        join_present(&self.whatsapp1, &self.whatsapp2)
    }
}

/// Identity of the business issuing the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    /// Trading name
    pub name: String,

    /// One-line description under the name
    pub tagline: String,

    /// Office location
    pub location: String,
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            name: "MCB OFFICE".to_string(),
            tagline: "For general trade from China to Mauritania and the import of all goods"
                .to_string(),
            location: "Friendship Bridge (Carrefour Madrid)".to_string(),
        }
    }
}

fn join_present(first: &str, second: &str) -> String {
    [first, second]
        .into_iter()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phones_skip_blank_entries() {
        let contact = ContactInfo {
            phone1: "20000001".to_string(),
            phone2: "30000002".to_string(),
            whatsapp1: " ".to_string(),
            whatsapp2: "30000002".to_string(),
            ..ContactInfo::default()
        };

        assert_eq!(contact.phones(), "20000001 / 30000002");
        assert_eq!(contact.whatsapps(), "30000002");
    }

    #[test]
    fn empty_contact_renders_empty_strings() {
        let contact = ContactInfo::default();

        assert!(contact.phones().is_empty());
        assert!(contact.whatsapps().is_empty());
    }
}

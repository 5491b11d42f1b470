//! CRM contact property builder

use serde_json::Value;

use super::entity::Properties;

/// Properties for a new CRM contact.
///
/// `phone` and `company` are optional: when absent (or empty) the key is left
/// out of the property map entirely rather than sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl NewContact {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
            company: None,
        }
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Property map in CRM naming (`email`, `firstname`, `lastname`, ...).
    pub fn into_properties(self) -> Properties {
        let mut properties = Properties::new();
        properties.insert("email".into(), Value::String(self.email));
        properties.insert("firstname".into(), Value::String(self.first_name));
        properties.insert("lastname".into(), Value::String(self.last_name));

        if let Some(phone) = self.phone.filter(|p| !p.is_empty()) {
            properties.insert("phone".into(), Value::String(phone));
        }
        if let Some(company) = self.company.filter(|c| !c.is_empty()) {
            properties.insert("company".into(), Value::String(company));
        }

        properties
    }
}

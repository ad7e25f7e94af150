use serde::{Deserialize, Serialize};

/// A system contact field that imported columns can be mapped onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFieldDefinition {
    /// Stable identifier used as the mapping key (e.g. `first_name`).
    pub key: String,
    /// Human-readable label shown in mapping dropdowns.
    pub label: String,
    /// Whether an import cannot proceed while this field is unmapped.
    pub required: bool,
    /// Short description for tooltips.
    pub description: String,
}

impl SystemFieldDefinition {
    pub fn new(key: &str, label: &str, required: bool, description: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            required,
            description: description.to_string(),
        }
    }
}

/// The built-in contact fields, in canonical display order.
///
/// Email is the only required field: an import without an email column
/// cannot be submitted.
pub fn system_fields() -> Vec<SystemFieldDefinition> {
    vec![
        SystemFieldDefinition::new(
            "email",
            "Email Address",
            true,
            "Primary email address for the contact",
        ),
        SystemFieldDefinition::new("name", "Full Name", false, "Complete display name"),
        SystemFieldDefinition::new("first_name", "First Name", false, "Given name"),
        SystemFieldDefinition::new("last_name", "Last Name", false, "Family name"),
        SystemFieldDefinition::new(
            "company_name",
            "Company",
            false,
            "Employer or organization name",
        ),
        SystemFieldDefinition::new("location", "Location", false, "City, region, or country"),
        SystemFieldDefinition::new("phone_number", "Phone", false, "Primary phone number"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn system_fields_are_unique_and_email_is_required() {
        let fields = system_fields();
        assert_eq!(fields.len(), 7);

        let keys: BTreeSet<&str> = fields.iter().map(|field| field.key.as_str()).collect();
        assert_eq!(keys.len(), fields.len(), "field keys must be unique");

        let required: Vec<&str> = fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.key.as_str())
            .collect();
        assert_eq!(required, vec!["email"]);
    }

    #[test]
    fn email_label_is_stable() {
        // The label is what validation reports to the user, so it is part of
        // the public contract.
        let fields = system_fields();
        assert_eq!(fields[0].key, "email");
        assert_eq!(fields[0].label, "Email Address");
    }
}

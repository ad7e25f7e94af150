//! Weighted keyword vocabularies for the system contact fields.
//!
//! Each table pairs a lowercase keyword with a weight in `(0, 1]` expressing
//! how strongly it indicates the field. Tables mix canonical names,
//! abbreviations, common misspellings, and a few non-English forms seen in
//! real exports.

pub(crate) type KeywordTable = &'static [(&'static str, f64)];

const EMAIL_KEYWORDS: KeywordTable = &[
    ("email", 1.0),
    ("e-mail", 1.0),
    ("email address", 1.0),
    ("mail", 0.8),
    ("em", 0.75),
    ("emial", 0.75),
    ("correo", 0.7),
];

const NAME_KEYWORDS: KeywordTable = &[
    ("name", 1.0),
    ("full name", 1.0),
    ("fullname", 0.95),
    ("contact name", 0.9),
    ("contact", 0.8),
    ("person", 0.75),
    ("nombre", 0.7),
    ("nme", 0.7),
];

const FIRST_NAME_KEYWORDS: KeywordTable = &[
    ("first name", 1.0),
    ("firstname", 1.0),
    ("given name", 0.9),
    ("first", 0.85),
    ("fname", 0.85),
    ("forename", 0.8),
    ("frist name", 0.75),
    ("prenom", 0.7),
];

const LAST_NAME_KEYWORDS: KeywordTable = &[
    ("last name", 1.0),
    ("lastname", 1.0),
    ("surname", 0.95),
    ("family name", 0.9),
    ("last", 0.85),
    ("lname", 0.85),
    ("lastnme", 0.75),
    ("apellido", 0.7),
];

const COMPANY_KEYWORDS: KeywordTable = &[
    ("company", 1.0),
    ("company name", 1.0),
    ("organization", 0.9),
    ("organisation", 0.9),
    ("employer", 0.85),
    ("business", 0.8),
    ("org", 0.8),
    ("firm", 0.75),
    ("compnay", 0.75),
    ("empresa", 0.7),
];

const LOCATION_KEYWORDS: KeywordTable = &[
    ("location", 1.0),
    ("city", 0.9),
    ("address", 0.85),
    ("country", 0.85),
    ("region", 0.8),
    ("state", 0.75),
    ("town", 0.75),
    ("loc", 0.75),
    ("locaton", 0.75),
    ("ciudad", 0.7),
];

const PHONE_KEYWORDS: KeywordTable = &[
    ("phone", 1.0),
    ("phone number", 1.0),
    ("telephone", 0.95),
    ("mobile", 0.9),
    ("contact number", 0.85),
    ("mobile number", 0.85),
    ("cell", 0.85),
    ("tel", 0.85),
    ("phne", 0.75),
    ("telefono", 0.7),
];

/// Keyword table for a field key. Unknown keys get an empty table so custom
/// fields still score through the similarity and overlap signals.
pub(crate) fn keywords_for(field_key: &str) -> KeywordTable {
    match field_key {
        "email" => EMAIL_KEYWORDS,
        "name" => NAME_KEYWORDS,
        "first_name" => FIRST_NAME_KEYWORDS,
        "last_name" => LAST_NAME_KEYWORDS,
        "company_name" => COMPANY_KEYWORDS,
        "location" => LOCATION_KEYWORDS,
        "phone_number" => PHONE_KEYWORDS,
        _ => &[],
    }
}

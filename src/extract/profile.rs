//! Student profile extraction
//!
//! The profile page is the least tabular of the portal pages: basic fields
//! live in alternating `<label>` pairs, the student's name sits in a styled
//! `<p>`, and the mobile number and proctor details hide inside accordion
//! tables that are told apart by fingerprint. Every field is independent;
//! a partial profile is a valid result.

use crate::extract::fingerprint::{classify_table, TableKind};
use crate::extract::table::{cell_text, rows_of, table_text_lower, tables_of};
use crate::extract::UNKNOWN_FIELD;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static SELECTOR_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("label").expect("Invalid label selector"));
static SELECTOR_STYLED_P: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p[style]").expect("Invalid styled p selector"));

/// Basic student profile, with optional proctor details
///
/// Fields not found in the markup stay at the `"-"` unknown sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub name: String,
    pub registration_number: String,
    pub institutional_email: String,
    pub mobile: String,
    pub program: String,
    pub school: String,
    pub proctor: Option<ProctorRecord>,
}

/// Proctor (faculty advisor) contact details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProctorRecord {
    pub faculty_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub cabin: String,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        ProfileRecord {
            name: UNKNOWN_FIELD.to_string(),
            registration_number: UNKNOWN_FIELD.to_string(),
            institutional_email: UNKNOWN_FIELD.to_string(),
            mobile: UNKNOWN_FIELD.to_string(),
            program: UNKNOWN_FIELD.to_string(),
            school: UNKNOWN_FIELD.to_string(),
            proctor: None,
        }
    }
}

impl Default for ProctorRecord {
    fn default() -> Self {
        ProctorRecord {
            faculty_id: UNKNOWN_FIELD.to_string(),
            name: UNKNOWN_FIELD.to_string(),
            email: UNKNOWN_FIELD.to_string(),
            mobile: UNKNOWN_FIELD.to_string(),
            cabin: UNKNOWN_FIELD.to_string(),
        }
    }
}

/// Extracts the student profile from raw profile-page markup
///
/// Never fails: fields that cannot be recovered keep their sentinel value,
/// and the proctor block is `None` when no proctor table is present.
pub fn extract_profile(html: &str) -> ProfileRecord {
    let document = Html::parse_document(html);
    let mut profile = ProfileRecord::default();

    extract_label_pairs(&document, &mut profile);
    extract_name(&document, &mut profile);
    extract_accordion_tables(&document, &mut profile);

    profile
}

/// Basic fields arrive as label/value `<label>` pairs
fn extract_label_pairs(document: &Html, profile: &mut ProfileRecord) {
    let labels: Vec<String> = document
        .select(&SELECTOR_LABEL)
        .map(|l| cell_text(&l))
        .collect();

    for pair in labels.windows(2) {
        let key = pair[0].to_uppercase();
        let value = pair[1].clone();
        if value.is_empty() {
            continue;
        }

        if key.contains("REGISTER NUMBER") {
            profile.registration_number = value;
        } else if key.contains("VIT EMAIL") {
            // Guard against picking up the label of an unrelated field
            if value.contains('@') {
                profile.institutional_email = value;
            }
        } else if key.contains("PROGRAM") {
            profile.program = value;
        } else if key.contains("SCHOOL NAME") {
            profile.school = value;
        }
    }
}

/// The student's name is a bold, centered paragraph above the detail card
fn extract_name(document: &Html, profile: &mut ProfileRecord) {
    for p in document.select(&SELECTOR_STYLED_P) {
        let style = p.value().attr("style").unwrap_or("");
        if style.contains("font-weight: bold") && style.contains("text-align: center") {
            let text = cell_text(&p);
            if !text.is_empty() {
                profile.name = text;
                return;
            }
        }
    }
}

/// Mobile number and proctor details live in fingerprinted accordion tables
fn extract_accordion_tables(document: &Html, profile: &mut ProfileRecord) {
    for table in tables_of(document) {
        match classify_table(&table_text_lower(&table)) {
            Some(TableKind::Proctor) => {
                let proctor = profile.proctor.get_or_insert_with(ProctorRecord::default);
                for row in rows_of(&table, None) {
                    if row.cells.len() < 2 {
                        continue;
                    }
                    let key = row.cells[0].to_lowercase();
                    let value = row.cells[1].clone();
                    if value.is_empty() {
                        continue;
                    }
                    if key.contains("faculty id") {
                        proctor.faculty_id = value;
                    } else if key.contains("name") {
                        proctor.name = value;
                    } else if key.contains("email") {
                        proctor.email = value;
                    } else if key.contains("mobile") {
                        proctor.mobile = value;
                    } else if key.contains("cabin") {
                        proctor.cabin = value;
                    }
                }
            }
            Some(TableKind::PersonalInfo) => {
                for row in rows_of(&table, None) {
                    if row.cells.len() < 2 {
                        continue;
                    }
                    let key = row.cells[0].to_lowercase();
                    if key.contains("mobile") && !row.cells[1].is_empty() {
                        profile.mobile = row.cells[1].clone();
                    }
                }
            }
            _ => {} // unrelated table, skipped without error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_PAGE: &str = r#"
        <html><body>
            <p style="font-weight: bold; text-align: center;">JANE DOE</p>
            <label>REGISTER NUMBER</label><label>22BCE7777</label>
            <label>VIT EMAIL</label><label>jane.22bce7777@vitapstudent.ac.in</label>
            <label>PROGRAM</label><label>BTech - CSE</label>
            <label>SCHOOL NAME</label><label>School of Computer Science</label>
            <table>
                <tr><td>Blood Group</td><td>O+ve</td></tr>
                <tr><td>Mobile Number</td><td>9876543210</td></tr>
                <tr><td>Native State</td><td>Andhra Pradesh</td></tr>
            </table>
            <table>
                <tr><td>Faculty ID</td><td>50321</td></tr>
                <tr><td>Name</td><td>Dr. Proctor</td></tr>
                <tr><td>Email</td><td>proctor@vitap.ac.in</td></tr>
                <tr><td>Mobile</td><td>9000000000</td></tr>
                <tr><td>Cabin</td><td>AB1-404</td></tr>
            </table>
        </body></html>
    "#;

    #[test]
    fn test_full_profile() {
        let profile = extract_profile(PROFILE_PAGE);
        assert_eq!(profile.name, "JANE DOE");
        assert_eq!(profile.registration_number, "22BCE7777");
        assert_eq!(
            profile.institutional_email,
            "jane.22bce7777@vitapstudent.ac.in"
        );
        assert_eq!(profile.program, "BTech - CSE");
        assert_eq!(profile.school, "School of Computer Science");
        assert_eq!(profile.mobile, "9876543210");

        let proctor = profile.proctor.unwrap();
        assert_eq!(proctor.faculty_id, "50321");
        assert_eq!(proctor.name, "Dr. Proctor");
        assert_eq!(proctor.email, "proctor@vitap.ac.in");
        assert_eq!(proctor.mobile, "9000000000");
        assert_eq!(proctor.cabin, "AB1-404");
    }

    #[test]
    fn test_partial_profile_keeps_sentinels() {
        let html = r#"
            <label>REGISTER NUMBER</label><label>22BCE7777</label>
        "#;
        let profile = extract_profile(html);
        assert_eq!(profile.registration_number, "22BCE7777");
        assert_eq!(profile.name, UNKNOWN_FIELD);
        assert_eq!(profile.institutional_email, UNKNOWN_FIELD);
        assert_eq!(profile.mobile, UNKNOWN_FIELD);
        assert!(profile.proctor.is_none());
    }

    #[test]
    fn test_email_requires_address_shape() {
        let html = r#"
            <label>VIT EMAIL</label><label>not yet assigned</label>
        "#;
        let profile = extract_profile(html);
        assert_eq!(profile.institutional_email, UNKNOWN_FIELD);
    }

    #[test]
    fn test_proctor_table_alone_yields_partial_proctor() {
        let html = r#"
            <table>
                <tr><td>Faculty ID</td><td>50321</td></tr>
                <tr><td>Cabin</td><td></td></tr>
            </table>
        "#;
        let profile = extract_profile(html);
        let proctor = profile.proctor.unwrap();
        assert_eq!(proctor.faculty_id, "50321");
        assert_eq!(proctor.cabin, UNKNOWN_FIELD);
    }

    #[test]
    fn test_empty_markup_returns_default() {
        let profile = extract_profile("");
        assert_eq!(profile, ProfileRecord::default());
    }

    #[test]
    fn test_unstyled_name_paragraph_ignored() {
        let html = r#"<p style="text-align: center;">NOT THE NAME</p>"#;
        let profile = extract_profile(html);
        assert_eq!(profile.name, UNKNOWN_FIELD);
    }
}

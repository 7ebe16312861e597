//! Table fingerprinting
//!
//! Portal pages bundle several unrelated tables with no type annotation.
//! Tables are told apart by scanning their full text for distinguishing
//! tokens. The fingerprint list is data-driven and evaluated in order,
//! first match wins, so new portal table variants can be added without
//! touching control flow.

/// Semantic kind of a portal table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Proctor (faculty advisor) contact details
    Proctor,

    /// Personal information block (mobile number lives here)
    PersonalInfo,

    /// Course table of a grade transcript or marks page
    GradeOrMarks,

    /// Credit/CGPA summary strip of the transcript
    Summary,
}

/// Ordered token fingerprints; a table matching any token of an entry is
/// classified as that entry's kind
const FINGERPRINTS: &[(&[&str], TableKind)] = &[
    (&["faculty id"], TableKind::Proctor),
    (&["native state", "blood group"], TableKind::PersonalInfo),
    (&["course code"], TableKind::GradeOrMarks),
    (&["credits registered"], TableKind::Summary),
];

/// Classifies a table by its lower-cased full text content
///
/// Returns `None` for unrecognized tables; callers skip those without error.
pub fn classify_table(table_text_lower: &str) -> Option<TableKind> {
    for (tokens, kind) in FINGERPRINTS {
        if tokens.iter().any(|t| table_text_lower.contains(t)) {
            return Some(*kind);
        }
    }
    None
}

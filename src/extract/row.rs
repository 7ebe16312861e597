//! Row classification
//!
//! Every tabular extractor (marks, exams, attendance) walks rows through the
//! same four-way split: section marker, course header, data row, or noise.
//! The split is expressed once here as a [`RowPolicy`] parameterized by
//! column indices and thresholds; the per-record extractors differ only in
//! the policy values and in what they do with each [`RowKind`].

use crate::extract::table::TableRow;
use regex::Regex;
use std::sync::LazyLock;

/// Course codes are uppercase letters followed by at least three digits
static COURSE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+\d{3,}").expect("Invalid course code regex"));

/// Returns true when the text starts with a course-code-like token
///
/// `CSE2001` and `MAT1011` match; `cse2001` (lowercase), `CS1` (too few
/// digits) and `2001CSE` (digits first) do not.
pub fn is_course_code(text: &str) -> bool {
    COURSE_CODE.is_match(text)
}

/// Classification of one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Announces a category (e.g. exam type) for the rows that follow
    SectionHeader(String),

    /// Starts a new course group (leading cell is a course code)
    CourseHeader,

    /// Belongs to the currently open group
    Data,

    /// Decorative or malformed; silently dropped
    Noise,
}

/// Column layout for one record type's rows
#[derive(Debug, Clone, Copy)]
pub struct RowPolicy {
    /// Index of the cell tested against the course-code pattern.
    /// `None` for record types without course-header rows.
    pub code_column: Option<usize>,

    /// Minimum cell count for a row to qualify as a course header
    pub min_code_columns: usize,

    /// Minimum cell count for a row to qualify as a data row
    pub min_data_columns: usize,
}

impl RowPolicy {
    /// Classifies a row, evaluated strictly in order:
    ///
    /// 1. zero cells → noise
    /// 2. designated section-header cell present → section header
    /// 3. course-code match at the policy's code column → course header
    /// 4. a group is open (or the type has no groups) and the row meets the
    ///    minimum column count → data
    /// 5. otherwise noise
    pub fn classify(&self, row: &TableRow, group_open: bool) -> RowKind {
        if row.cells.is_empty() {
            return RowKind::Noise;
        }

        if let Some(text) = &row.section_header {
            return RowKind::SectionHeader(text.clone());
        }

        if let Some(column) = self.code_column {
            if row.cells.len() >= self.min_code_columns
                && row.cells.get(column).is_some_and(|c| is_course_code(c))
            {
                return RowKind::CourseHeader;
            }
        }

        let grouped = self.code_column.is_some();
        if (!grouped || group_open) && row.cells.len() >= self.min_data_columns {
            return RowKind::Data;
        }

        RowKind::Noise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> TableRow {
        TableRow {
            cells: cells.iter().map(|c| c.to_string()).collect(),
            section_header: None,
            onclick: None,
        }
    }

    #[test]
    fn test_course_code_accepts_standard_codes() {
        assert!(is_course_code("CSE2001"));
        assert!(is_course_code("MAT1011"));
        assert!(is_course_code("PHY1007 Lab")); // leading token is what counts
    }

    #[test]
    fn test_course_code_rejects_lookalikes() {
        assert!(!is_course_code("cse2001")); // lowercase
        assert!(!is_course_code("CS1")); // too few digits
        assert!(!is_course_code("2001CSE")); // digits first
        assert!(!is_course_code(""));
        assert!(!is_course_code("Total"));
    }

    fn marks_policy() -> RowPolicy {
        RowPolicy {
            code_column: Some(1),
            min_code_columns: 2,
            min_data_columns: 6,
        }
    }

    #[test]
    fn test_zero_cells_is_noise() {
        let r = row(&[]);
        assert_eq!(marks_policy().classify(&r, true), RowKind::Noise);
    }

    #[test]
    fn test_section_header_wins_over_everything() {
        let mut r = row(&["FAT"]);
        r.section_header = Some("FAT".to_string());
        assert_eq!(
            marks_policy().classify(&r, false),
            RowKind::SectionHeader("FAT".to_string())
        );
    }

    #[test]
    fn test_course_header_detected_at_code_column() {
        let r = row(&["1", "CSE2001", "Data Structures"]);
        assert_eq!(marks_policy().classify(&r, false), RowKind::CourseHeader);
    }

    #[test]
    fn test_data_row_requires_open_group() {
        let r = row(&["1", "CAT-1", "15", "Present", "12", "12.5"]);
        assert_eq!(marks_policy().classify(&r, true), RowKind::Data);
        assert_eq!(marks_policy().classify(&r, false), RowKind::Noise);
    }

    #[test]
    fn test_short_row_is_noise_even_with_open_group() {
        let r = row(&["decorative", "row"]);
        assert_eq!(marks_policy().classify(&r, true), RowKind::Noise);
    }

    #[test]
    fn test_ungrouped_policy_ignores_group_state() {
        let policy = RowPolicy {
            code_column: None,
            min_code_columns: 0,
            min_data_columns: 5,
        };
        let r = row(&["1", "10-02-2025", "C1", "Theory", "Present"]);
        assert_eq!(policy.classify(&r, false), RowKind::Data);
    }
}

//! Exam schedule extraction
//!
//! The schedule page groups exams under banner rows naming the exam type
//! ("CAT-1", "FAT", ...). The banner applies to every entry row until the
//! next banner, so the scan carries the active type forward explicitly.

use crate::extract::row::{RowKind, RowPolicy};
use crate::extract::spool::Spool;
use crate::extract::table::{all_rows, TableRow};
use scraper::Html;

/// CSS class the portal puts on exam-type banner cells
const SECTION_HEADER_CLASS: &str = "panelHead-secondary";

/// Exam entry rows carry eleven fixed columns:
/// s.no, code, title, course type, class id, slot, date, session,
/// reporting time, exam time, venue. Shorter rows are decoration.
const EXAMS_POLICY: RowPolicy = RowPolicy {
    code_column: Some(1),
    min_code_columns: 11,
    min_data_columns: 11,
};

const CODE_COLUMN: usize = 1;
const TITLE_COLUMN: usize = 2;
const CLASS_ID_COLUMN: usize = 4;
const DATE_COLUMN: usize = 6;
const TIME_COLUMN: usize = 9;
const VENUE_COLUMN: usize = 10;

/// One scheduled exam
///
/// `exam_date` and `exam_time` are kept in the portal's own free-text format
/// (e.g. "12-Mar-2025"); interpretation is left to the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamEntry {
    pub course_code: String,
    pub course_title: String,
    pub class_id: String,
    pub exam_type: String,
    pub exam_date: String,
    pub exam_time: String,
    pub venue: String,
}

/// Carries the active exam type across entry rows
#[derive(Debug)]
struct ExamScan {
    entries: Vec<ExamEntry>,
    current_type: String,
}

impl ExamScan {
    fn new() -> Self {
        ExamScan {
            entries: Vec::new(),
            current_type: "Unknown".to_string(),
        }
    }

    fn set_type(&mut self, label: String) {
        self.current_type = label;
    }

    fn push_entry(&mut self, row: &TableRow) {
        self.entries.push(ExamEntry {
            course_code: row.cells[CODE_COLUMN].clone(),
            course_title: row.cells[TITLE_COLUMN].clone(),
            class_id: row.cells[CLASS_ID_COLUMN].clone(),
            exam_type: self.current_type.clone(),
            exam_date: row.cells[DATE_COLUMN].clone(),
            exam_time: row.cells[TIME_COLUMN].clone(),
            venue: row.cells[VENUE_COLUMN].clone(),
        });
    }
}

/// Extracts the exam schedule from raw schedule-page markup
///
/// Entries keep source row order. A page with zero surviving entries yields
/// an empty list and fires the diagnostic spooler; this never raises.
pub fn extract_exam_schedule(html: &str, spool: &dyn Spool) -> Vec<ExamEntry> {
    let document = Html::parse_document(html);
    let mut scan = ExamScan::new();

    for row in all_rows(&document, Some(SECTION_HEADER_CLASS)) {
        match EXAMS_POLICY.classify(&row, false) {
            RowKind::SectionHeader(label) => scan.set_type(label),
            RowKind::CourseHeader => scan.push_entry(&row),
            RowKind::Data | RowKind::Noise => {}
        }
    }

    if scan.entries.is_empty() {
        spool.spool("exams", html);
    }
    scan.entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::spool::NullSpool;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSpool {
        calls: RefCell<Vec<String>>,
    }

    impl Spool for RecordingSpool {
        fn spool(&self, kind: &str, _raw_markup: &str) {
            self.calls.borrow_mut().push(kind.to_string());
        }
    }

    fn entry_row(code: &str, title: &str, date: &str) -> String {
        format!(
            "<tr><td>1</td><td>{code}</td><td>{title}</td><td>Theory</td>\
             <td>AP2025001</td><td>C1</td><td>{date}</td><td>FN</td>\
             <td>08:30</td><td>09:00 - 12:00</td><td>AB1-G01</td></tr>"
        )
    }

    #[test]
    fn test_exam_type_carried_forward() {
        let html = format!(
            r#"<table>
                <tr><td class="panelHead-secondary">FAT</td></tr>
                {}{}{}
            </table>"#,
            entry_row("CSE2001", "Data Structures", "12-Mar-2025"),
            entry_row("MAT1011", "Calculus", "14-Mar-2025"),
            entry_row("PHY1007", "Physics", "16-Mar-2025"),
        );

        let exams = extract_exam_schedule(&html, &NullSpool);
        assert_eq!(exams.len(), 3);
        assert!(exams.iter().all(|e| e.exam_type == "FAT"));
    }

    #[test]
    fn test_type_switches_at_next_banner() {
        let html = format!(
            r#"<table>
                <tr><td class="panelHead-secondary">CAT-1</td></tr>
                {}
                <tr><td class="panelHead-secondary">FAT</td></tr>
                {}
            </table>"#,
            entry_row("CSE2001", "Data Structures", "12-Feb-2025"),
            entry_row("CSE2001", "Data Structures", "12-Mar-2025"),
        );

        let exams = extract_exam_schedule(&html, &NullSpool);
        assert_eq!(exams[0].exam_type, "CAT-1");
        assert_eq!(exams[1].exam_type, "FAT");
    }

    #[test]
    fn test_entries_without_banner_marked_unknown() {
        let html = format!("<table>{}</table>", entry_row("CSE2001", "DS", "12-Mar-2025"));
        let exams = extract_exam_schedule(&html, &NullSpool);
        assert_eq!(exams[0].exam_type, "Unknown");
    }

    #[test]
    fn test_fixed_offsets_read() {
        let html = format!("<table>{}</table>", entry_row("CSE2001", "Data Structures", "12-Mar-2025"));
        let exams = extract_exam_schedule(&html, &NullSpool);
        let e = &exams[0];
        assert_eq!(e.course_code, "CSE2001");
        assert_eq!(e.course_title, "Data Structures");
        assert_eq!(e.class_id, "AP2025001");
        assert_eq!(e.exam_date, "12-Mar-2025");
        assert_eq!(e.exam_time, "09:00 - 12:00");
        assert_eq!(e.venue, "AB1-G01");
    }

    #[test]
    fn test_rows_below_eleven_columns_are_noise() {
        let spool = RecordingSpool::default();
        let html = r#"
            <table>
                <tr><td>1</td><td>CSE2001</td><td>Data Structures</td><td>Theory</td></tr>
            </table>
        "#;
        let exams = extract_exam_schedule(html, &spool);
        assert!(exams.is_empty());
        assert_eq!(spool.calls.borrow().as_slice(), ["exams"]);
    }

    #[test]
    fn test_non_course_code_row_rejected() {
        let html = "<table><tr><td>1</td><td>Venue Change Notice</td><td>a</td><td>b</td>\
                    <td>c</td><td>d</td><td>e</td><td>f</td><td>g</td><td>h</td><td>i</td></tr></table>";
        let exams = extract_exam_schedule(html, &NullSpool);
        assert!(exams.is_empty());
    }

    #[test]
    fn test_garbage_markup_never_panics() {
        assert!(extract_exam_schedule("", &NullSpool).is_empty());
        assert!(extract_exam_schedule("no tables at all", &NullSpool).is_empty());
    }
}

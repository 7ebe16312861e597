//! Internal marks extraction
//!
//! The marks page interleaves course-header rows (code + title) with
//! component rows (CAT, FAT, assignments...) in one undifferentiated row
//! stream, with no usable table boundary. Rows are classified with a
//! [`RowPolicy`] and grouped under the most recent course header by an
//! explicit accumulator.

use crate::extract::row::{RowKind, RowPolicy};
use crate::extract::spool::Spool;
use crate::extract::table::{all_rows, TableRow};
use crate::extract::UNKNOWN_FIELD;
use scraper::Html;

/// Mark-component titles worth keeping; anything else on a six-column row is
/// portal decoration
const COMPONENT_TOKENS: &[&str] = &[
    "CAT",
    "FAT",
    "Assignment",
    "Digital",
    "Quiz",
    "Lab",
    "Project",
    "Mid-Term",
];

/// Column layout of the marks page
const MARKS_POLICY: RowPolicy = RowPolicy {
    code_column: Some(1),
    min_code_columns: 2,
    min_data_columns: 6,
};

const TITLE_COLUMN: usize = 1;
const MAX_SCORE_COLUMN: usize = 2;
const SCORED_COLUMN: usize = 5;
// One left of the scored column; the portal sometimes shifts the score when
// a status column is missing
const SCORED_FALLBACK_COLUMN: usize = 4;

/// One course with its recovered mark components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseMarks {
    pub course_code: String,
    pub course_title: String,
    pub components: Vec<MarkComponent>,
}

/// A single mark component (e.g. "CAT-1")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkComponent {
    pub title: String,
    pub max_score: String,
    pub scored_score: String,
}

/// Groups component rows under the currently open course header
#[derive(Debug, Default)]
struct MarksScan {
    courses: Vec<CourseMarks>,
    open: Option<CourseMarks>,
}

impl MarksScan {
    fn begin_course(&mut self, row: &TableRow) {
        self.close();
        self.open = Some(CourseMarks {
            course_code: row.cells[1].clone(),
            course_title: row
                .cells
                .get(2)
                .filter(|t| !t.is_empty())
                .cloned()
                .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            components: Vec::new(),
        });
    }

    fn push_component(&mut self, row: &TableRow) {
        let Some(course) = self.open.as_mut() else {
            return;
        };

        let title = &row.cells[TITLE_COLUMN];
        if !COMPONENT_TOKENS.iter().any(|t| title.contains(t)) || title.contains("Total") {
            return;
        }

        course.components.push(MarkComponent {
            title: title.clone(),
            max_score: row.cells[MAX_SCORE_COLUMN].clone(),
            scored_score: scored_with_fallback(&row.cells),
        });
    }

    fn close(&mut self) {
        if let Some(course) = self.open.take() {
            self.courses.push(course);
        }
    }

    fn finish(mut self) -> Vec<CourseMarks> {
        self.close();
        self.courses
    }
}

/// Reads the scored column, falling back one column left when the primary is
/// blank or a placeholder dash
fn scored_with_fallback(cells: &[String]) -> String {
    let primary = cells.get(SCORED_COLUMN).map(String::as_str).unwrap_or("");
    if primary.is_empty() || primary == "-" {
        cells
            .get(SCORED_FALLBACK_COLUMN)
            .cloned()
            .unwrap_or_default()
    } else {
        primary.to_string()
    }
}

/// Extracts per-course internal marks from raw marks-page markup
///
/// Returns courses in source order, each with its component rows in source
/// order. A page where no course header survives classification yields an
/// empty list and fires the diagnostic spooler; this never raises.
pub fn extract_marks(html: &str, spool: &dyn Spool) -> Vec<CourseMarks> {
    let document = Html::parse_document(html);
    let mut scan = MarksScan::default();

    for row in all_rows(&document, None) {
        match MARKS_POLICY.classify(&row, scan.open.is_some()) {
            RowKind::CourseHeader => scan.begin_course(&row),
            RowKind::Data => scan.push_component(&row),
            RowKind::SectionHeader(_) | RowKind::Noise => {}
        }
    }

    let courses = scan.finish();
    if courses.is_empty() {
        spool.spool("marks", html);
    }
    courses
}

//! Grade transcript extraction
//!
//! The transcript page carries one course table (fingerprinted by the
//! "course code" token) and one credit/CGPA summary strip (fingerprinted by
//! "credits registered"). Retakes show up as duplicate course codes; the
//! first occurrence wins.

use crate::extract::fingerprint::{classify_table, TableKind};
use crate::extract::row::is_course_code;
use crate::extract::spool::Spool;
use crate::extract::table::{rows_of, table_text_lower, tables_of};
use crate::extract::UNKNOWN_FIELD;
use scraper::Html;
use std::collections::HashSet;

const CODE_COLUMN: usize = 1;
const NAME_COLUMN: usize = 2;
const CREDITS_COLUMN: usize = 4;
const GRADE_COLUMN: usize = 5;
const MIN_COURSE_COLUMNS: usize = 6;

/// One graded course on the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRecord {
    pub code: String,
    pub name: String,
    pub credits: String,
    pub grade: String,
}

/// Overall credit/CGPA standing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSummary {
    pub cgpa: String,
    pub credits_earned: String,
    pub credits_registered: String,
}

impl TranscriptSummary {
    /// The unknown-sentinel triple used when the summary strip is absent
    pub fn unknown() -> Self {
        TranscriptSummary {
            cgpa: UNKNOWN_FIELD.to_string(),
            credits_earned: UNKNOWN_FIELD.to_string(),
            credits_registered: UNKNOWN_FIELD.to_string(),
        }
    }
}

/// Full grade history: course records plus the overall summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeHistory {
    pub courses: Vec<GradeRecord>,
    pub summary: TranscriptSummary,
}

/// Extracts the grade transcript from raw transcript-page markup
///
/// Courses keep source order, deduplicated by code (first occurrence wins).
/// The summary defaults to the unknown sentinel when the strip is missing.
/// A page whose course table is positively identified but yields no records
/// fires the diagnostic spooler; this never raises.
pub fn extract_grade_history(html: &str, spool: &dyn Spool) -> GradeHistory {
    let document = Html::parse_document(html);
    let tables = tables_of(&document);

    let mut courses = Vec::new();
    let mut course_table_found = false;
    let mut summary = TranscriptSummary::unknown();
    let mut summary_found = false;

    for table in &tables {
        match classify_table(&table_text_lower(table)) {
            Some(TableKind::GradeOrMarks) if !course_table_found => {
                course_table_found = true;
                let mut seen = HashSet::new();
                for row in rows_of(table, None) {
                    if row.cells.len() < MIN_COURSE_COLUMNS {
                        continue;
                    }
                    let code = &row.cells[CODE_COLUMN];
                    if !is_course_code(code) {
                        continue;
                    }
                    if seen.insert(code.clone()) {
                        courses.push(GradeRecord {
                            code: code.clone(),
                            name: row.cells[NAME_COLUMN].clone(),
                            credits: row.cells[CREDITS_COLUMN].clone(),
                            grade: row.cells[GRADE_COLUMN].clone(),
                        });
                    }
                }
            }
            Some(TableKind::Summary) if !summary_found => {
                // First data row of the strip: registered, earned, cgpa
                if let Some(row) = rows_of(table, None)
                    .into_iter()
                    .find(|r| r.cells.len() >= 3)
                {
                    summary_found = true;
                    summary = TranscriptSummary {
                        credits_registered: row.cells[0].clone(),
                        credits_earned: row.cells[1].clone(),
                        cgpa: row.cells[2].clone(),
                    };
                }
            }
            _ => {}
        }
    }

    if course_table_found && courses.is_empty() {
        spool.spool("grades", html);
    }

    GradeHistory { courses, summary }
}

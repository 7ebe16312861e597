//! Attendance extraction
//!
//! Two related extractors: the per-course attendance summary, and the
//! per-class attendance history reached by drilling down on one course.
//! Both tables carry stable `id` attributes, so they are located by id
//! rather than by text fingerprint.
//!
//! Summary rows embed the parameters for the drill-down request in an
//! inline `onclick` action string; decoding that string is optional
//! functionality and never an error.

use crate::extract::row::{RowKind, RowPolicy};
use crate::extract::spool::Spool;
use crate::extract::table::{rows_of, table_by_id};
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

const SUMMARY_TABLE_ID: &str = "AttendanceDetailDataTable";
const HISTORY_TABLE_ID: &str = "StudentAttendanceDetailDataTable";

/// Summary rows: s.no, category, course, slot, faculty(?), attended, total,
/// percentage, and a trailing action cell
const SUMMARY_POLICY: RowPolicy = RowPolicy {
    code_column: None,
    min_code_columns: 0,
    min_data_columns: 8,
};

/// History rows: sl.no, date, slot, day/time, status, remarks
const HISTORY_POLICY: RowPolicy = RowPolicy {
    code_column: None,
    min_code_columns: 0,
    min_data_columns: 5,
};

/// Composite "code - name - type" splits on this literal delimiter
const COURSE_FIELD_DELIMITER: &str = " - ";

/// Inline action call of shape `Name('a','b','COURSE_ID','TYPE_CODE')`;
/// the third and fourth quoted arguments are the drill-down parameters
static DRILLDOWN_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z_]\w*\(\s*'[^']+'\s*,\s*'[^']+'\s*,\s*'([^']+)'\s*,\s*'([^']+)'\s*\)")
        .expect("Invalid drilldown regex")
});

/// Parameters for requesting the detail-level attendance page of one course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrilldownRef {
    pub course_id: String,
    pub type_code: String,
}

/// One course's attendance summary
///
/// Numeric fields are kept as the portal's strings; `percentage` has the
/// trailing `%` stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSummaryEntry {
    pub course_code: String,
    pub course_name: String,
    pub course_type: String,
    pub slot: String,
    pub percentage: String,
    pub attended: String,
    pub total: String,
    pub drilldown_ref: Option<DrilldownRef>,
}

/// One class meeting in a course's attendance history
///
/// `status` is an open set of portal strings ("Present", "Absent", and
/// variants); use [`is_present`] to interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceHistoryEntry {
    pub date: String,
    pub slot: String,
    pub status: String,
}

/// Heuristic presence check over the portal's status variants
///
/// Anything containing "Present" (including e.g. "Present (OD)") counts as
/// attended; everything else counts as absent. Portal text drift here is an
/// operational hazard, not a parsing guarantee.
pub fn is_present(status: &str) -> bool {
    status.contains("Present")
}

/// Decodes the drill-down parameters from an inline action string
///
/// Absence of a match yields `None`, never an error: drill-down is optional.
pub fn decode_drilldown_ref(onclick: &str) -> Option<DrilldownRef> {
    let captures = DRILLDOWN_CALL.captures(onclick)?;
    Some(DrilldownRef {
        course_id: captures[1].to_string(),
        type_code: captures[2].to_string(),
    })
}

/// Extracts the per-course attendance summary from raw markup
///
/// Entries keep source row order. When the summary table is absent the
/// result is empty without a spool (a "no such section" page); when the
/// table is present but no rows survive, the spooler fires.
pub fn extract_attendance_summary(html: &str, spool: &dyn Spool) -> Vec<AttendanceSummaryEntry> {
    let document = Html::parse_document(html);
    let Some(table) = table_by_id(&document, SUMMARY_TABLE_ID) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    // First row is the column header
    for row in rows_of(&table, None).iter().skip(1) {
        if SUMMARY_POLICY.classify(row, false) != RowKind::Data {
            continue;
        }

        let composite = &row.cells[2];
        let (course_code, course_type) = split_composite(composite);

        entries.push(AttendanceSummaryEntry {
            course_code,
            course_name: composite.clone(),
            course_type,
            slot: row.cells[3].clone(),
            percentage: row.cells[7].replace('%', ""),
            attended: row.cells[5].clone(),
            total: row.cells[6].clone(),
            drilldown_ref: row.onclick.as_deref().and_then(decode_drilldown_ref),
        });
    }

    if entries.is_empty() {
        spool.spool("attendance", html);
    }
    entries
}

/// Extracts one course's attendance history from raw detail-page markup
///
/// Entries keep source row order (the portal emits them chronologically).
pub fn extract_attendance_history(html: &str, spool: &dyn Spool) -> Vec<AttendanceHistoryEntry> {
    let document = Html::parse_document(html);
    let Some(table) = table_by_id(&document, HISTORY_TABLE_ID) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for row in rows_of(&table, None) {
        if HISTORY_POLICY.classify(&row, false) != RowKind::Data {
            continue;
        }
        entries.push(AttendanceHistoryEntry {
            date: row.cells[1].clone(),
            slot: row.cells[2].clone(),
            status: row.cells[4].clone(),
        });
    }

    if entries.is_empty() {
        spool.spool("attendance_detail", html);
    }
    entries
}

/// Splits the composite "code - name - type" course field
///
/// First segment is the code, last segment is the type. Without the
/// delimiter the whole string stands in for the code and the type is empty.
fn split_composite(composite: &str) -> (String, String) {
    if composite.contains(COURSE_FIELD_DELIMITER) {
        let mut parts = composite.split(COURSE_FIELD_DELIMITER);
        let code = parts.next().unwrap_or(composite).to_string();
        let course_type = parts.last().unwrap_or("").to_string();
        (code, course_type)
    } else {
        (composite.to_string(), String::new())
    }
}

//! Tolerant HTML-to-record extraction engine
//!
//! One independent extractor per record type, each recovering a well-typed
//! record set from loosely structured portal markup that may omit fields,
//! reorder columns, or contain extraneous rows.
//!
//! # Components
//!
//! - [`fingerprint`]: classifies untyped tables by distinguishing text tokens
//! - [`row`]: the shared four-way row classification policy
//! - [`table`]: markup flattening helpers shared by all extractors
//! - [`spool`]: diagnostic side-channel for markup that yields no rows
//! - one module per record type: [`profile`], [`semester`], [`marks`],
//!   [`exams`], [`attendance`], [`grades`]
//!
//! # Failure semantics
//!
//! Extractors are infallible by type: they accept an immutable markup
//! snapshot, return a freshly constructed value, and never raise. Fingerprint
//! misses and malformed rows degrade to empty or partial results; a table
//! that was positively identified but yields zero rows additionally fires the
//! diagnostic spooler. The caller's interactive session stays usable even
//! when a page's markup is unparseable.

pub mod attendance;
pub mod exams;
pub mod fingerprint;
pub mod grades;
pub mod marks;
pub mod profile;
pub mod row;
pub mod semester;
pub mod spool;
pub mod table;

/// Sentinel for fields the markup did not yield
pub const UNKNOWN_FIELD: &str = "-";

// Re-export the record types and extractor entry points
pub use attendance::{
    decode_drilldown_ref, extract_attendance_history, extract_attendance_summary, is_present,
    AttendanceHistoryEntry, AttendanceSummaryEntry, DrilldownRef,
};
pub use exams::{extract_exam_schedule, ExamEntry};
pub use fingerprint::{classify_table, TableKind};
pub use grades::{extract_grade_history, GradeHistory, GradeRecord, TranscriptSummary};
pub use marks::{extract_marks, CourseMarks, MarkComponent};
pub use profile::{extract_profile, ProctorRecord, ProfileRecord};
pub use row::{is_course_code, RowKind, RowPolicy};
pub use semester::{extract_semesters, Semester};
pub use spool::{FileSpool, NullSpool, Spool};

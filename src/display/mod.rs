//! Terminal display formatting
//!
//! Plain-text rendering of the extracted records for the interactive menu
//! loop. The display layer owns all presentation decisions (sorting,
//! abbreviation, flagging); the records themselves stay in portal form.

mod records;
mod schedule;

pub use records::{print_header, render_grade_history, render_marks, render_profile};
pub use schedule::{
    render_attendance_history, render_attendance_summary, render_exam_schedule,
    LOW_ATTENDANCE_THRESHOLD,
};

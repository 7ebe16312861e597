//! Terminal rendering for exam schedule and attendance records
//!
//! Dates stay free-text in the records; this layer parses them only for
//! ordering, with unparseable values pushed to the end rather than dropped.

use crate::extract::{is_present, AttendanceHistoryEntry, AttendanceSummaryEntry, ExamEntry};
use chrono::NaiveDate;

/// Attendance below this percentage is flagged
pub const LOW_ATTENDANCE_THRESHOLD: f64 = 75.0;

/// Portal exam dates look like "12-Mar-2025"
fn parse_exam_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%d-%b-%Y").ok()
}

/// History dates drift between "10-02-2025" and "10-Feb-2025"
fn parse_history_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(date, "%d-%b-%Y"))
        .ok()
}

/// Renders the exam schedule, soonest exam first
pub fn render_exam_schedule(exams: &[ExamEntry]) {
    if exams.is_empty() {
        println!("   (No exams scheduled)");
        return;
    }

    let mut sorted: Vec<&ExamEntry> = exams.iter().collect();
    sorted.sort_by_key(|e| parse_exam_date(&e.exam_date).unwrap_or(NaiveDate::MAX));

    println!(
        "   {:<12} {:<20} {:<10} {:<15} {:<8} {:<8} {}",
        "DATE", "TIME", "CODE", "CLASS ID", "TYPE", "VENUE", "TITLE"
    );
    println!("   {}", "-".repeat(110));
    for exam in sorted {
        let exam_type: String = exam.exam_type.chars().take(8).collect();
        println!(
            "   {:<12} {:<20} {:<10} {:<15} {:<8} {:<8} {}",
            exam.exam_date,
            exam.exam_time,
            exam.course_code,
            exam.class_id,
            exam_type,
            exam.venue,
            exam.course_title
        );
    }
    println!("   {}", "-".repeat(110));
}

/// Renders the numbered attendance summary with low-attendance flags
///
/// The row numbers are what the drill-down prompt selects by.
pub fn render_attendance_summary(entries: &[AttendanceSummaryEntry]) {
    if entries.is_empty() {
        println!("   (No data found)");
        return;
    }

    println!(
        "\n   {:<5} {:<9} {:<14} {:<12} {:<6} {:<9} {}",
        "S.No", "CODE", "TYPE", "SLOT", "%", "ATT/TOT", "STATUS"
    );
    println!("   {}", "-".repeat(70));

    for (i, entry) in entries.iter().enumerate() {
        let status = match entry.percentage.parse::<f64>() {
            Ok(p) if p < LOW_ATTENDANCE_THRESHOLD => "LOW !",
            Ok(_) => "OK",
            Err(_) => "-",
        };

        println!(
            "   {:<5} {:<9} {:<14} {:<12} {:<6} {:>3}/{:<5} {}",
            i + 1,
            entry.course_code,
            shorten_course_type(&entry.course_type),
            middle_slot(&entry.slot),
            entry.percentage,
            entry.attended,
            entry.total,
            status
        );
    }
    println!("   {}", "-".repeat(70));
}

/// Renders one course's attendance log, newest class first, absences marked
pub fn render_attendance_history(course_name: &str, entries: &[AttendanceHistoryEntry]) {
    if entries.is_empty() {
        println!("   [!] No records found.");
        return;
    }

    let mut sorted: Vec<&AttendanceHistoryEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| std::cmp::Reverse(parse_history_date(&e.date).unwrap_or(NaiveDate::MIN)));

    let name: String = course_name.chars().take(50).collect();
    println!("\n   {}", "-".repeat(60));
    println!("   LOG: {}", name);
    println!("   {}", "-".repeat(60));
    println!("   {:<15} {:<15} {}", "DATE", "SLOT", "STATUS");
    println!("   {}", "-".repeat(60));

    for entry in sorted {
        if is_present(&entry.status) {
            println!("   {:<15} {:<15} {}", entry.date, entry.slot, entry.status);
        } else {
            println!(
                "   {:<15} {:<15} !! {} !!",
                entry.date, entry.slot, entry.status
            );
        }
    }
    println!("   {}", "-".repeat(60));
}

/// Abbreviates the verbose course-type labels the portal uses
fn shorten_course_type(course_type: &str) -> String {
    course_type
        .replace("Embedded Theory", "Emb. Th.")
        .replace("Embedded Lab", "Emb. Lab")
        .replace("Theory Only", "Th. Only")
}

/// The portal's slot field reads "C1 - TC1 - ..."; the middle part is the
/// one worth showing
fn middle_slot(slot: &str) -> String {
    match slot.split(" - ").nth(1) {
        Some(middle) => middle.to_string(),
        None => slot.to_string(),
    }
}

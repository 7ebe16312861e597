//! Terminal rendering for profile, transcript, and marks records

use crate::extract::{CourseMarks, GradeHistory, ProfileRecord};

/// Prints a section banner
pub fn print_header(title: &str) {
    println!("\n{}", title);
    println!("{}", "=".repeat(60));
}

/// Renders the student profile card, with the proctor block when present
pub fn render_profile(profile: &ProfileRecord) {
    println!("\n   {:^60}", "STUDENT PROFILE");
    println!("   {}", "=".repeat(60));
    println!("   {:<15} : {}", "Name", profile.name);
    println!("   {:<15} : {}", "Reg No", profile.registration_number);
    println!("   {:<15} : {}", "Program", profile.program);
    println!("   {:<15} : {}", "School", profile.school);
    println!("   {:<15} : {}", "VIT Email", profile.institutional_email);
    println!("   {:<15} : {}", "Mobile", profile.mobile);
    println!("   {}", "-".repeat(60));

    match &profile.proctor {
        Some(proctor) => {
            println!("\n   {:^60}", "PROCTOR INFORMATION");
            println!("   {}", "=".repeat(60));
            println!("   {:<15} : {}", "Name", proctor.name);
            println!("   {:<15} : {}", "ID", proctor.faculty_id);
            println!("   {:<15} : {}", "Email", proctor.email);
            println!("   {:<15} : {}", "Mobile", proctor.mobile);
            println!("   {:<15} : {}", "Cabin", proctor.cabin);
        }
        None => {
            println!("\n   [!] Proctor information section was not found.");
        }
    }
    println!("   {}\n", "=".repeat(60));
}

/// Renders the academic transcript with the credit/CGPA standing block
pub fn render_grade_history(history: &GradeHistory) {
    if history.courses.is_empty() {
        println!("\n   [!] No grade history found.");
        return;
    }

    println!("\n   ACADEMIC TRANSCRIPT");
    println!("   {}", "-".repeat(95));
    println!(
        "   {:<15} {:<12} {:<12} {}",
        "CODE", "GRADE", "CREDITS", "COURSE NAME"
    );
    println!("   {}", "-".repeat(95));
    for course in &history.courses {
        println!(
            "   {:<15} {:<12} {:<12} {}",
            course.code, course.grade, course.credits, course.name
        );
    }
    println!("   {}\n", "-".repeat(95));

    println!("   ACADEMIC STANDING (OVERALL)");
    println!("   {}", "-".repeat(43));
    println!("   CURRENT CGPA          : {}", history.summary.cgpa);
    println!(
        "   CREDITS EARNED        : {}",
        history.summary.credits_earned
    );
    println!(
        "   CREDITS REGISTERED    : {}",
        history.summary.credits_registered
    );
    println!("   {}\n", "-".repeat(43));
}

/// Renders the internal marks grid, courses sorted by code
pub fn render_marks(courses: &[CourseMarks]) {
    if courses.is_empty() {
        println!("   (No marks found)");
        return;
    }

    let mut sorted: Vec<&CourseMarks> = courses.iter().collect();
    sorted.sort_by(|a, b| a.course_code.cmp(&b.course_code));

    println!(
        "   {:<10} {:<35} {:<20} {:<8} {}",
        "CODE", "COURSE TITLE", "MARK TITLE", "SCORE", "MAX"
    );
    println!("   {}", "-".repeat(85));

    for course in sorted {
        let title: String = course.course_title.chars().take(30).collect();

        if course.components.is_empty() {
            println!("   {:<10} {:<35} {:<20} {:<8} {}", course.course_code, title, "-", "-", "-");
            println!("   {}", "-".repeat(85));
            continue;
        }

        for (i, component) in course.components.iter().enumerate() {
            if i == 0 {
                println!(
                    "   {:<10} {:<35} {:<20} {:<8} {}",
                    course.course_code,
                    title,
                    component.title,
                    component.scored_score,
                    component.max_score
                );
            } else {
                println!(
                    "   {:<10} {:<35} {:<20} {:<8} {}",
                    "", "", component.title, component.scored_score, component.max_score
                );
            }
        }
        println!("   {}", "-".repeat(85));
    }
}

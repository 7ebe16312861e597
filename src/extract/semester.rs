//! Semester list extraction
//!
//! The timetable page carries a `<select>` of semesters. The option list is
//! pulled straight out of the raw markup with a regex: the surrounding page
//! structure varies, but the option tags themselves are stable.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static OPTION_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<option\s+value="([A-Z0-9]+)"[^>]*>([^<]+)</option>"#)
        .expect("Invalid option tag regex")
});

/// One selectable semester
///
/// Identity is the portal's semester id; `display_name` is whatever label
/// the portal shows for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semester {
    pub id: String,
    pub display_name: String,
}

/// Extracts the semester list from raw timetable-page markup
///
/// Placeholder "Choose..." options are skipped. Duplicate ids are dropped,
/// first occurrence wins, and the portal's native ordering (newest first by
/// convention) is preserved. Returns an empty list when no options are
/// present; the caller treats that as "no such section".
pub fn extract_semesters(html: &str) -> Vec<Semester> {
    let mut semesters = Vec::new();
    let mut seen = HashSet::new();

    for capture in OPTION_TAG.captures_iter(html) {
        let id = capture[1].to_string();
        let name = capture[2]
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if name.contains("Choose") || id.is_empty() {
            continue;
        }
        if seen.insert(id.clone()) {
            semesters.push(Semester {
                id,
                display_name: name,
            });
        }
    }

    semesters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_options_in_order() {
        let html = r#"
            <select id="semesterSubId">
                <option value="AP2025262">Fall Semester 2025-26</option>
                <option value="AP2024251">Winter Semester 2024-25</option>
            </select>
        "#;
        let semesters = extract_semesters(html);
        assert_eq!(semesters.len(), 2);
        assert_eq!(semesters[0].id, "AP2025262");
        assert_eq!(semesters[0].display_name, "Fall Semester 2025-26");
        assert_eq!(semesters[1].id, "AP2024251");
    }

    #[test]
    fn test_dedup_by_id_keeps_first_display_name() {
        let html = r#"
            <option value="S1">Fall 2024</option>
            <option value="S2">Spring 2025</option>
            <option value="S1">Fall 2024 (dup)</option>
        "#;
        let semesters = extract_semesters(html);
        assert_eq!(semesters.len(), 2);
        assert_eq!(semesters[0].id, "S1");
        assert_eq!(semesters[0].display_name, "Fall 2024");
        assert_eq!(semesters[1].id, "S2");
    }

    #[test]
    fn test_choose_placeholder_skipped() {
        let html = r#"
            <option value="0">-- Choose Semester --</option>
            <option value="AP2025262">Fall Semester 2025-26</option>
        "#;
        let semesters = extract_semesters(html);
        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].id, "AP2025262");
    }

    #[test]
    fn test_display_name_whitespace_collapsed() {
        let html = "<option value=\"AP1\">Fall\n        Semester   2025</option>";
        let semesters = extract_semesters(html);
        assert_eq!(semesters[0].display_name, "Fall Semester 2025");
    }

    #[test]
    fn test_garbage_markup_yields_empty_list() {
        assert!(extract_semesters("").is_empty());
        assert!(extract_semesters("<html><body>nothing here</body></html>").is_empty());
    }
}

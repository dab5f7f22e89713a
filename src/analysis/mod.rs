//! Pure aggregation over student rows.
//!
//! All grouping walks the rows in order, so distinct labels come out in
//! first-occurrence order and the results are deterministic for a given
//! row order. Rendering and persistence never happen here.

use crate::record::Student;

/// Distinct class labels in first-occurrence order with their row counts.
pub fn counts_by_class(rows: &[Student]) -> Vec<(String, usize)> {
    count_labels(rows.iter().map(|row| row.class.as_str()))
}

/// Distinct section labels in first-occurrence order with their row counts.
pub fn counts_by_section(rows: &[Student]) -> Vec<(String, usize)> {
    count_labels(rows.iter().map(|row| row.section.as_str()))
}

/// Most frequent grade per class, classes in first-occurrence order.
///
/// Ties break toward the grade encountered first within the class group.
pub fn modal_grade_per_class(rows: &[Student]) -> Vec<(String, String)> {
    let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
    for row in rows {
        match groups.iter().position(|(class, _)| *class == row.class) {
            Some(idx) => groups[idx].1.push(row.grade.as_str()),
            None => groups.push((row.class.clone(), vec![row.grade.as_str()])),
        }
    }

    groups
        .into_iter()
        .map(|(class, grades)| {
            let modal = mode(&grades).unwrap_or_else(|| "No Data".to_string());
            (class, modal)
        })
        .collect()
}

fn count_labels<'a, I>(labels: I) -> Vec<(String, usize)>
where
    I: Iterator<Item = &'a str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        match counts.iter().position(|(seen, _)| seen == label) {
            Some(idx) => counts[idx].1 += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }
    counts
}

fn mode(values: &[&str]) -> Option<String> {
    let counts = count_labels(values.iter().copied());
    let best = counts.iter().map(|(_, count)| *count).max()?;
    counts
        .into_iter()
        .find(|(_, count)| *count == best)
        .map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, class: &str, section: &str, roll_no: i32, grade: &str) -> Student {
        Student::new(
            name.to_string(),
            class.to_string(),
            section.to_string(),
            roll_no,
            grade.to_string(),
        )
    }

    #[test]
    fn test_counts_by_class_first_occurrence_order() {
        let rows = vec![
            student("Alice", "10", "A", 1, "A+"),
            student("Bob", "12", "B", 2, "B"),
            student("Carol", "10", "A", 3, "A"),
            student("Dan", "10", "C", 4, "B"),
        ];

        let counts = counts_by_class(&rows);
        assert_eq!(
            counts,
            vec![("10".to_string(), 3), ("12".to_string(), 1)]
        );
    }

    #[test]
    fn test_counts_by_section() {
        let rows = vec![
            student("Alice", "10", "A", 1, "A+"),
            student("Bob", "10", "B", 2, "B"),
            student("Carol", "12", "A", 3, "A"),
        ];

        let counts = counts_by_section(&rows);
        assert_eq!(
            counts,
            vec![("A".to_string(), 2), ("B".to_string(), 1)]
        );
    }

    #[test]
    fn test_counts_empty_rows() {
        assert!(counts_by_class(&[]).is_empty());
        assert!(counts_by_section(&[]).is_empty());
    }

    #[test]
    fn test_modal_grade_per_class() {
        let rows = vec![
            student("Alice", "10", "A", 1, "A+"),
            student("Bob", "10", "B", 2, "B"),
            student("Carol", "10", "A", 3, "B"),
            student("Dan", "12", "A", 4, "C"),
        ];

        let modal = modal_grade_per_class(&rows);
        assert_eq!(
            modal,
            vec![
                ("10".to_string(), "B".to_string()),
                ("12".to_string(), "C".to_string()),
            ]
        );
    }

    #[test]
    fn test_modal_grade_tie_breaks_toward_first_encountered() {
        // Two grades tie at one occurrence each within class 10
        let rows = vec![
            student("Alice", "10", "A", 1, "A+"),
            student("Bob", "10", "B", 2, "B"),
        ];

        let modal = modal_grade_per_class(&rows);
        assert_eq!(modal, vec![("10".to_string(), "A+".to_string())]);

        // Deterministic across repeated runs on the same input order
        let again = modal_grade_per_class(&rows);
        assert_eq!(modal, again);
    }

    #[test]
    fn test_modal_grade_later_majority_wins_over_earlier_single() {
        let rows = vec![
            student("Alice", "10", "A", 1, "B"),
            student("Bob", "10", "B", 2, "A+"),
            student("Carol", "10", "A", 3, "A+"),
        ];

        let modal = modal_grade_per_class(&rows);
        assert_eq!(modal, vec![("10".to_string(), "A+".to_string())]);
    }

    #[test]
    fn test_modal_grade_empty_rows() {
        assert!(modal_grade_per_class(&[]).is_empty());
    }
}

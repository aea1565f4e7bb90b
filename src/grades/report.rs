use std::fmt::Write as _;

use crate::domain::Student;

use super::roster::{Roster, SkippedLine};

/// Summary of one class built from a [`Roster`].
#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    /// Accepted students ordered by id.
    pub students: Vec<Student>,
    pub average: Option<f64>,
    pub highest: Option<Student>,
    pub lowest: Option<Student>,
    pub skipped: Vec<SkippedLine>,
}

impl GradeReport {
    pub fn from_roster(roster: Roster) -> Self {
        let mut students = roster.students.list_all();
        students.sort_by_key(|student| student.id);

        let average = if students.is_empty() {
            None
        } else {
            let total: u32 = students.iter().map(|s| s.score).sum();
            Some(f64::from(total) / students.len() as f64)
        };
        // Ties go to the lowest id.
        let highest = students.iter().rev().max_by_key(|s| s.score).cloned();
        let lowest = students.iter().min_by_key(|s| s.score).cloned();

        Self {
            students,
            average,
            highest,
            lowest,
            skipped: roster.skipped,
        }
    }

    /// Plain-text rendering written to the report file.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Student Grade Report");
        let _ = writeln!(out, "====================");

        if self.students.is_empty() {
            let _ = writeln!(out, "No valid student records.");
        } else {
            let _ = writeln!(out, "{:<6}{:<24}{:>5}  Grade", "ID", "Name", "Score");
            for student in &self.students {
                let _ = writeln!(
                    out,
                    "{:<6}{:<24}{:>5}  {}",
                    student.id,
                    student.name,
                    student.score,
                    student.letter_grade()
                );
            }
            let _ = writeln!(out);
        }

        if let Some(average) = self.average {
            let _ = writeln!(out, "Class average: {:.2}", average);
        }
        if let Some(best) = &self.highest {
            let _ = writeln!(out, "Highest: {} ({})", best.name, best.score);
        }
        if let Some(worst) = &self.lowest {
            let _ = writeln!(out, "Lowest: {} ({})", worst.name, worst.score);
        }

        if !self.skipped.is_empty() {
            let _ = writeln!(out, "Skipped {} line(s):", self.skipped.len());
            for skipped in &self.skipped {
                let _ = writeln!(out, "  line {}: {}", skipped.line, skipped.reason);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_statistics() {
        let report = GradeReport::from_roster(Roster::parse("3,Chen,85\n1,Alice,92\n2,Bob,71\n4,Dee,92\n"));

        let ids: Vec<u32> = report.students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(report.average, Some(85.0));
        assert_eq!(report.highest.as_ref().map(|s| s.id), Some(1));
        assert_eq!(report.lowest.as_ref().map(|s| s.name.as_str()), Some("Bob"));
    }

    #[test]
    fn test_render_lists_grades_and_skips() {
        let report = GradeReport::from_roster(Roster::parse("1,Alice,92\n2,Bob,59\noops\n"));
        let text = report.render();

        assert!(text.contains("Alice"));
        assert!(text.lines().any(|l| l.starts_with("1 ") && l.ends_with('A')));
        assert!(text.lines().any(|l| l.starts_with("2 ") && l.ends_with('F')));
        assert!(text.contains("Class average: 75.50"));
        assert!(text.contains("Skipped 1 line(s):"));
        assert!(text.contains("  line 3: expected 3 fields, found 1"));
    }

    #[test]
    fn test_empty_class() {
        let report = GradeReport::from_roster(Roster::parse(""));

        assert_eq!(report.average, None);
        assert!(report.highest.is_none());
        assert!(report.render().contains("No valid student records."));
    }
}

use tracing::{debug, warn};

use crate::domain::Student;
use crate::store_framework::KeyedEntityStore;

/// Highest score a line may carry.
pub const MAX_SCORE: u32 = 100;

/// A line left out of the roster and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: u64,
    pub reason: String,
}

/// Students read from a grade file plus the lines that were rejected.
#[derive(Debug, Default)]
pub struct Roster {
    pub students: KeyedEntityStore<Student>,
    pub skipped: Vec<SkippedLine>,
}

impl Roster {
    /// Parses `id,name,score` lines. Bad lines are skipped and reported, never fatal.
    pub fn parse(content: &str) -> Self {
        let mut roster = Self::default();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    roster.skip(line, e.to_string());
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            if record.len() != 3 {
                roster.skip(line, format!("expected 3 fields, found {}", record.len()));
                continue;
            }

            let student: Student = match record.deserialize(None) {
                Ok(student) => student,
                Err(e) => {
                    let reason = match e.kind() {
                        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
                        _ => e.to_string(),
                    };
                    roster.skip(line, reason);
                    continue;
                }
            };
            if student.score > MAX_SCORE {
                roster.skip(line, format!("score {} is above {}", student.score, MAX_SCORE));
                continue;
            }
            if student.name.is_empty() {
                roster.skip(line, "missing name".to_string());
                continue;
            }

            if let Err(e) = roster.students.insert(student) {
                roster.skip(line, e.to_string());
                continue;
            }
            debug!(line, "Student record accepted");
        }

        roster
    }

    fn skip(&mut self, line: u64, reason: String) {
        warn!(line, reason = %reason, "Skipping grade line");
        self.skipped.push(SkippedLine { line, reason });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_file() {
        let roster = Roster::parse("1,Alice,92\n2, Bob ,71\n3,Chen,85\n");

        assert_eq!(roster.students.len(), 3);
        assert!(roster.skipped.is_empty());
        assert_eq!(roster.students.get_by_id(&2).unwrap().name, "Bob");
    }

    #[test]
    fn test_parse_skips_and_reports_bad_lines() {
        let content = "1,Alice,92\n2,Bob\nx,Carl,70\n4,Dana,abc\n5,Eve,101\n1,Alice Again,88\n6,Finn,64\n";
        let roster = Roster::parse(content);

        let mut ids: Vec<u32> = roster.students.iter().map(|s| s.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 6]);

        let lines: Vec<u64> = roster.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 3, 4, 5, 6]);
        assert_eq!(roster.skipped[0].reason, "expected 3 fields, found 2");
        assert_eq!(roster.skipped[3].reason, "score 101 is above 100");
        assert_eq!(roster.skipped[4].reason, "Duplicate key: 1");
        assert_eq!(roster.students.get_by_id(&1).unwrap().name, "Alice");
    }

    #[test]
    fn test_parse_ignores_blank_lines() {
        let roster = Roster::parse("\n1,Alice,92\n\n   \n2,Bob,71\n");

        assert_eq!(roster.students.len(), 2);
        assert!(roster.skipped.is_empty());
    }

    #[test]
    fn test_stray_quote_only_costs_its_own_line() {
        let roster = Roster::parse("1,\"Alice,92\n2,Bob,80\n3,Cy,70\n");

        let mut ids: Vec<u32> = roster.students.iter().map(|s| s.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(roster.skipped.is_empty());
        assert_eq!(roster.students.get_by_id(&1).unwrap().name, "\"Alice");
    }

    #[test]
    fn test_stray_quote_on_bad_line_is_reported_alone() {
        let roster = Roster::parse("1,\"Alice\n2,Bob,80\n3,Cy,70\n");

        assert_eq!(roster.students.len(), 2);
        assert_eq!(
            roster.skipped,
            vec![SkippedLine { line: 1, reason: "expected 3 fields, found 2".to_string() }]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let roster = Roster::parse("");
        assert!(roster.students.is_empty());
        assert!(roster.skipped.is_empty());
    }
}

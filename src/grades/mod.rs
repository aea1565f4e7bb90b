//! Student grade reports read from `id,name,score` text files.

pub mod entity;
pub mod error;
pub mod report;
pub mod roster;

pub use error::*;
pub use report::*;
pub use roster::*;

use std::path::Path;

use tracing::{info, instrument};

/// Reads a grade file and builds its report.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_report(path: &Path) -> Result<GradeReport, GradeError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| GradeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let report = GradeReport::from_roster(Roster::parse(&content));
    info!(
        students = report.students.len(),
        skipped = report.skipped.len(),
        "Grade file loaded"
    );
    Ok(report)
}

/// Writes the rendered report to `path`, replacing any existing file.
#[instrument(skip(report, path), fields(path = %path.display()))]
pub async fn write_report(report: &GradeReport, path: &Path) -> Result<(), GradeError> {
    tokio::fs::write(path, report.render())
        .await
        .map_err(|source| GradeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Grade report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_and_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("grades.txt");
        let output = dir.path().join("report.txt");
        tokio::fs::write(&input, "1,Alice,92\n2,Bob,bad\n").await.unwrap();

        let report = load_report(&input).await.unwrap();
        assert_eq!(report.students.len(), 1);
        assert_eq!(report.skipped.len(), 1);

        write_report(&report, &output).await.unwrap();
        let written = tokio::fs::read_to_string(&output).await.unwrap();
        assert_eq!(written, report.render());
    }

    #[tokio::test]
    async fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_report(&missing).await.unwrap_err();
        assert!(matches!(err, GradeError::Read { .. }));
    }
}

use std::path::PathBuf;

use crate::errors::{DeployError, UploadError};
use crate::upload::UploadReceipt;

#[derive(Debug)]
pub enum FileStatus {
    Uploaded(UploadReceipt),
    /// Source map, skipped on purpose
    Ignored,
    Failed(UploadError),
}

/// What happened to one file of the distribution directory
#[derive(Debug)]
pub struct FileOutcome {
    pub relative_path: String,
    pub local_path: PathBuf,
    pub key: String,
    pub status: FileStatus,
}

impl FileOutcome {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }
}

/// Per-file outcomes of a run, in enumeration order.
///
/// Every dispatched upload is recorded, so a caller can tell a partial failure
/// from a total one. `first_failure` is the failure that completed first.
#[derive(Debug, Default)]
pub struct UploadReport {
    outcomes: Vec<FileOutcome>,
    first_failure: Option<usize>,
}

impl UploadReport {
    /// Build a report from outcomes listed in completion order, each tagged
    /// with its enumeration index.
    #[must_use]
    pub fn from_completed(mut completed: Vec<(usize, FileOutcome)>) -> Self {
        let first_failed_idx = completed
            .iter()
            .find(|(_, outcome)| outcome.is_failed())
            .map(|(idx, _)| *idx);
        completed.sort_by_key(|(idx, _)| *idx);

        let first_failure =
            first_failed_idx.and_then(|idx| completed.iter().position(|(i, _)| *i == idx));
        let outcomes = completed.into_iter().map(|(_, outcome)| outcome).collect();

        Self {
            outcomes,
            first_failure,
        }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn uploaded(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Uploaded(_)))
    }

    #[must_use]
    pub fn ignored(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Ignored))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed(_)))
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.first_failure.is_none()
    }

    #[must_use]
    pub fn first_error(&self) -> Option<&FileOutcome> {
        self.first_failure.map(|idx| &self.outcomes[idx])
    }

    /// Collapse into the run result: `Ok` when nothing failed, otherwise the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Upload`] carrying the first failure and the failure count.
    pub fn into_result(mut self) -> Result<Self, DeployError> {
        let Some(idx) = self.first_failure else {
            return Ok(self);
        };
        let failed = self.failed();
        let outcome = self.outcomes.swap_remove(idx);
        match outcome.status {
            FileStatus::Failed(source) => Err(DeployError::Upload {
                path: outcome.local_path,
                failed,
                source,
            }),
            // first_failure only ever points at a Failed outcome
            _ => Err(DeployError::Runtime(format!(
                "inconsistent report entry for {}",
                outcome.local_path.display()
            ))),
        }
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, status: FileStatus) -> FileOutcome {
        FileOutcome {
            relative_path: name.to_string(),
            local_path: PathBuf::from("/dist").join(name),
            key: name.to_string(),
            status,
        }
    }

    fn rejected(msg: &str) -> FileStatus {
        FileStatus::Failed(UploadError::Rejected {
            status: 401,
            message: msg.to_string(),
        })
    }

    #[test]
    fn test_sorted_back_into_enumeration_order() {
        let report = UploadReport::from_completed(vec![
            (2, outcome("c.js", FileStatus::Ignored)),
            (1, outcome("b.js", rejected("first"))),
            (0, outcome("a.js", rejected("second"))),
        ]);
        let names: Vec<&str> = report
            .outcomes()
            .iter()
            .map(|o| o.relative_path.as_str())
            .collect();
        assert_eq!(names, vec!["a.js", "b.js", "c.js"]);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.ignored(), 1);

        // first failure by completion, not by position
        assert_eq!(report.first_error().unwrap().relative_path, "b.js");
    }

    #[test]
    fn test_into_result_carries_first_failure() {
        let report = UploadReport::from_completed(vec![
            (1, outcome("b.js", rejected("bad token"))),
            (0, outcome("a.js", rejected("timeout"))),
        ]);
        match report.into_result() {
            Err(DeployError::Upload { path, failed, source }) => {
                assert_eq!(path, PathBuf::from("/dist/b.js"));
                assert_eq!(failed, 2);
                assert!(source.to_string().contains("bad token"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_all_ok() {
        let receipt = UploadReceipt {
            key: "a.js".to_string(),
            hash: "Fh8x".to_string(),
        };
        let report =
            UploadReport::from_completed(vec![(0, outcome("a.js", FileStatus::Uploaded(receipt)))]);
        assert!(report.is_success());
        assert_eq!(report.uploaded(), 1);
        assert!(report.into_result().is_ok());
    }
}

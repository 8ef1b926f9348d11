use crate::archive::ArchiveGroup;
use crate::errors::Error;

/// Every group extracted, or nothing to do.
pub const EXIT_OK: i32 = 0;
/// The run completed but at least one group was skipped or failed.
pub const EXIT_GROUP_FAILURE: i32 = 1;
/// The run was aborted, or the arguments were rejected.
pub const EXIT_FATAL: i32 = 2;

#[derive(Debug)]
pub enum GroupOutcome {
    Extracted { entry: String, removed: usize },
    /// Holds `NoEntryFound` or `ExtractionFailed`.
    Failed(Error),
}

impl GroupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GroupOutcome::Extracted { .. })
    }
}

#[derive(Debug)]
pub struct GroupReport {
    pub group: ArchiveGroup,
    pub outcome: GroupOutcome,
}

/// Per-group results of one run, in processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    groups: Vec<GroupReport>,
}

impl RunReport {
    pub const HEADERS: [&'static str; 3] = ["ARCHIVE", "PARTS", "RESULT"];

    pub fn push(&mut self, group: ArchiveGroup, outcome: GroupOutcome) {
        self.groups.push(GroupReport { group, outcome });
    }

    pub fn groups(&self) -> &[GroupReport] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn extracted(&self) -> usize {
        self.groups.iter().filter(|g| g.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.extracted()
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed() == 0 {
            EXIT_OK
        } else {
            EXIT_GROUP_FAILURE
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.groups
            .iter()
            .map(|g| {
                let first = g.group.members().first().map_or(g.group.key(), String::as_str);
                let (name, result) = match &g.outcome {
                    GroupOutcome::Extracted { entry, removed: 0 } => {
                        (entry.as_str(), "extracted".to_string())
                    }
                    GroupOutcome::Extracted { entry, removed } => {
                        (entry.as_str(), format!("extracted, {removed} removed"))
                    }
                    GroupOutcome::Failed(Error::ExtractionFailed { entry, code, .. }) => {
                        let result = match code {
                            Some(c) => format!("failed ({c})"),
                            None => "failed (signal)".to_string(),
                        };
                        (entry.as_str(), result)
                    }
                    GroupOutcome::Failed(Error::NoEntryFound { .. }) => {
                        (first, "no entry part".to_string())
                    }
                    GroupOutcome::Failed(other) => (first, other.to_string()),
                };
                vec![name.to_string(), g.group.len().to_string(), result]
            })
            .collect()
    }
}

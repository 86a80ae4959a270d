//! Summaries of generated workload files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::command::{parse_contents, Command, CommandTag};
use crate::error::{WorkloadError, WorkloadResult};

/// Per-file counts of a parsed workload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStats {
    pub writes: usize,
    pub reads: usize,
}

/// Record counts of a workload, overall and per target file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadStats {
    pub total: usize,
    pub writes: usize,
    pub reads: usize,
    pub by_file: BTreeMap<String, FileStats>,
}

impl WorkloadStats {
    #[must_use]
    pub fn from_commands(commands: &[Command]) -> Self {
        let mut stats = Self::default();
        for command in commands {
            let entry = stats.by_file.entry(command.file().to_string()).or_default();
            match command.tag() {
                CommandTag::Write => {
                    stats.writes += 1;
                    entry.writes += 1;
                }
                CommandTag::Read => {
                    stats.reads += 1;
                    entry.reads += 1;
                }
            }
        }
        stats.total = commands.len();
        stats
    }

    /// Fraction of records that are writes, `0.0` for an empty workload.
    #[must_use]
    pub fn write_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.writes as f64 / self.total as f64
    }
}

/// Parses a workload file and summarizes it.
pub fn inspect_file(path: &Path) -> WorkloadResult<WorkloadStats> {
    let text = fs::read_to_string(path).map_err(|err| WorkloadError::io(path, err))?;
    let commands = parse_contents(&text).map_err(|source| WorkloadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WorkloadStats::from_commands(&commands))
}

//! End-to-end generation of one workload file per profile.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::command::{Command, CommandTag};
use crate::config::GeneratorConfig;
use crate::error::WorkloadResult;
use crate::generate::{build_initialization_contents, build_random_contents};
use crate::output::{ensure_output_directory, write_profile_file};
use crate::profile::Profile;

/// Outcome of writing a single profile file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileReport {
    pub name: String,
    pub path: PathBuf,
    pub writes: usize,
    pub reads: usize,
}

impl ProfileReport {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.writes + self.reads
    }
}

/// Outcome of a full run, one entry per profile in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub profiles: Vec<ProfileReport>,
}

/// Validated configuration plus the random source used to draw records.
pub struct Generator {
    config: GeneratorConfig,
    files: Vec<String>,
    rng: StdRng,
}

impl Generator {
    /// Validates `config` and seeds the random source.
    pub fn new(config: GeneratorConfig) -> WorkloadResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let files = config.target_files();
        Ok(Self { config, files, rng })
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The ordered target file set.
    #[must_use]
    pub fn target_files(&self) -> &[String] {
        &self.files
    }

    /// Builds the records for one profile without touching the filesystem.
    pub fn build_profile(&mut self, profile: &Profile) -> Vec<Command> {
        let records = if profile.is_initialization() {
            build_initialization_contents(&self.files)
        } else {
            build_random_contents(
                &self.files,
                self.config.commands_per_file,
                profile.prob_write,
                &mut self.rng,
            )
        };
        debug!(
            profile = %profile.name,
            records = records.len(),
            "built profile"
        );
        records
    }

    /// Writes every configured profile, sequentially and in order.
    pub fn run(&mut self) -> WorkloadResult<GenerationReport> {
        let output_dir = self.config.output_dir.clone();
        ensure_output_directory(&output_dir)?;

        let profiles = self.config.profiles.clone();
        let mut report = GenerationReport::default();
        for profile in &profiles {
            let records = self.build_profile(profile);
            let path = write_profile_file(&output_dir, &profile.name, &records)?;
            let writes = records
                .iter()
                .filter(|record| record.tag() == CommandTag::Write)
                .count();
            let reads = records.len() - writes;
            info!(
                profile = %profile.name,
                path = %path.display(),
                writes,
                reads,
                "wrote workload file"
            );
            report.profiles.push(ProfileReport {
                name: profile.name.clone(),
                path,
                writes,
                reads,
            });
        }
        Ok(report)
    }
}

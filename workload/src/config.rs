//! Generator configuration.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::profile::{default_profiles, Profile};

/// Everything the generator needs to produce one batch of workload files.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Destination directory, created if absent.
    pub output_dir: PathBuf,

    /// Records per file for every profile except the initialization one.
    pub commands_per_file: usize,

    /// Size of the target file set (`file1.txt` .. `fileN.txt`).
    pub file_count: usize,

    /// Profiles in generation order.
    pub profiles: Vec<Profile>,

    /// Seed for reproducible output; entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("input_data"),
            commands_per_file: 1000,
            file_count: 10,
            profiles: default_profiles(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates a small, seeded configuration suitable for testing.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            commands_per_file: 20,
            file_count: 3,
            seed: Some(1),
            ..Self::default()
        }
    }

    /// The ordered target file set shared by all profiles.
    #[must_use]
    pub fn target_files(&self) -> Vec<String> {
        target_files(self.file_count)
    }

    /// Rejects configurations that would produce empty or ambiguous output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_count == 0 {
            return Err(ConfigError::NoTargetFiles);
        }
        if self.commands_per_file == 0 {
            return Err(ConfigError::NoCommands);
        }
        if self.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let mut names = HashSet::new();
        for profile in &self.profiles {
            profile.validate()?;
            if !names.insert(profile.name.as_str()) {
                return Err(ConfigError::DuplicateProfile {
                    name: profile.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Builds `file1.txt` .. `file{count}.txt`.
#[must_use]
pub fn target_files(count: usize) -> Vec<String> {
    (1..=count).map(|idx| format!("file{idx}.txt")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("input_data"));
        assert_eq!(config.commands_per_file, 1000);
        assert_eq!(config.file_count, 10);
        assert_eq!(config.profiles.len(), 4);
        assert_eq!(config.seed, None);
        config.validate().unwrap();
    }

    #[test]
    fn testing_config_smaller() {
        let testing = GeneratorConfig::for_testing();
        let default = GeneratorConfig::default();
        assert!(testing.commands_per_file < default.commands_per_file);
        assert!(testing.file_count < default.file_count);
        assert!(testing.seed.is_some());
    }

    #[test]
    fn target_files_are_ordered() {
        assert_eq!(target_files(3), ["file1.txt", "file2.txt", "file3.txt"]);
        assert!(target_files(0).is_empty());
    }

    #[test]
    fn rejects_zero_file_count() {
        let config = GeneratorConfig {
            file_count: 0,
            ..GeneratorConfig::for_testing()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoTargetFiles));
    }

    #[test]
    fn rejects_zero_commands() {
        let config = GeneratorConfig {
            commands_per_file: 0,
            ..GeneratorConfig::for_testing()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoCommands));
    }

    #[test]
    fn rejects_empty_profiles() {
        let config = GeneratorConfig {
            profiles: Vec::new(),
            ..GeneratorConfig::for_testing()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoProfiles));
    }

    #[test]
    fn rejects_duplicate_profiles() {
        let config = GeneratorConfig {
            profiles: vec![
                Profile::new("RANDOM", 0.5, 0.5),
                Profile::new("RANDOM", 0.9, 0.1),
            ],
            ..GeneratorConfig::for_testing()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateProfile {
                name: "RANDOM".to_string()
            })
        );
    }

    #[test]
    fn rejects_invalid_profile() {
        let config = GeneratorConfig {
            profiles: vec![Profile::new("RANDOM", 0.5, 0.6)],
            ..GeneratorConfig::for_testing()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilitySum { .. })
        ));
    }
}

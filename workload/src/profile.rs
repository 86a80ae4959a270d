//! Named write/read probability profiles.

use crate::error::ConfigError;

/// Name of the profile that seeds every target file with one write.
pub const INIT_PROFILE: &str = "INIT_FILES";

/// Allowed drift of `prob_write + prob_read` from 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// A named mix of write and read probabilities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub name: String,
    pub prob_write: f64,
    pub prob_read: f64,
}

impl Profile {
    /// Creates a profile from explicit probabilities.
    pub fn new(name: impl Into<String>, prob_write: f64, prob_read: f64) -> Self {
        Self {
            name: name.into(),
            prob_write,
            prob_read,
        }
    }

    /// Creates a profile whose read probability is the complement of `prob_write`.
    pub fn with_write_ratio(name: impl Into<String>, prob_write: f64) -> Self {
        Self::new(name, prob_write, 1.0 - prob_write)
    }

    /// The initialization profile.
    #[must_use]
    pub fn initialization() -> Self {
        Self::new(INIT_PROFILE, 1.0, 0.0)
    }

    /// Returns true for the profile that bypasses the probability draw.
    #[must_use]
    pub fn is_initialization(&self) -> bool {
        self.name == INIT_PROFILE
    }

    /// File name of the generated output, `<name>.txt`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name)
    }

    /// Validates the name and both probabilities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_name(&self.name)?;
        for value in [self.prob_write, self.prob_read] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange {
                    name: self.name.clone(),
                    value,
                });
            }
        }
        let sum = self.prob_write + self.prob_read;
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(ConfigError::ProbabilitySum {
                name: self.name.clone(),
                sum,
            });
        }
        Ok(())
    }
}

/// The four profiles shipped by default, in generation order.
#[must_use]
pub fn default_profiles() -> Vec<Profile> {
    vec![
        Profile::initialization(),
        Profile::new("RANDOM", 0.5, 0.5),
        Profile::new("WRITE_HEAVY", 0.9, 0.1),
        Profile::new("READ_HEAVY", 0.1, 0.9),
    ]
}

fn validate_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyProfileName);
    }
    let bad_char = name.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
    if bad_char || name == "." || name == ".." {
        return Err(ConfigError::InvalidProfileName {
            name: name.to_string(),
        });
    }
    Ok(())
}

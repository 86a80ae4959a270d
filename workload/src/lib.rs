//! Workload file generation for dfs command engines.
//!
//! This crate builds the text files a file-server client replays:
//! - Typed `write`/`read` command records and their line format
//! - Named write/read probability profiles
//! - Seedable generation of one file per profile
//! - Parsing and summarizing of generated files
//!
//! # Design Principles
//!
//! - **Typed first** - Records are values; rendering is a separate pass.
//! - **Explicit randomness** - The random source is a handle, seedable for tests.
//! - **Fail before writing** - Bad configurations are rejected up front.

mod command;
mod config;
mod error;
mod generate;
mod generator;
mod inspect;
mod output;
mod profile;

pub use command::{
    format_record, parse_contents, parse_line, Command, CommandTag, FIELD_SEPARATOR,
};
pub use config::{target_files, GeneratorConfig};
pub use error::{ConfigError, ParseError, WorkloadError, WorkloadResult};
pub use generate::{
    build_initialization_contents, build_random_contents, render_contents, write_payload,
    INITIAL_PAYLOAD,
};
pub use generator::{GenerationReport, Generator, ProfileReport};
pub use inspect::{inspect_file, FileStats, WorkloadStats};
pub use output::{ensure_output_directory, write_profile_file};
pub use profile::{default_profiles, Profile, INIT_PROFILE, PROBABILITY_TOLERANCE};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use workload::{inspect_file, Generator, GeneratorConfig, Profile, WorkloadStats};

#[derive(Parser)]
#[command(
    name = "dfsgen",
    version,
    about = "Workload file generator for dfs command engines"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one workload file per profile.
    Generate {
        /// JSON configuration file; flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory for generated files.
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Number of commands per non-initialization profile.
        #[arg(long)]
        commands_per_file: Option<usize>,
        /// Number of target files (file1.txt .. fileN.txt).
        #[arg(long)]
        file_count: Option<usize>,
        /// RNG seed for deterministic results.
        #[arg(long)]
        seed: Option<u64>,
        /// Profile as NAME=PROB_WRITE; repeat to replace the profile list.
        #[arg(long = "profile", value_parser = parse_profile)]
        profiles: Vec<Profile>,
    },
    /// Parse generated workload files and print record counts.
    Inspect {
        /// Workload files, or directories whose *.txt files are inspected.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate {
            config,
            out_dir,
            commands_per_file,
            file_count,
            seed,
            profiles,
        } => {
            let mut config = match config {
                Some(path) => load_config(&path)?,
                None => GeneratorConfig::default(),
            };
            if let Some(out_dir) = out_dir {
                config.output_dir = out_dir;
            }
            if let Some(count) = commands_per_file {
                config.commands_per_file = count;
            }
            if let Some(count) = file_count {
                config.file_count = count;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if !profiles.is_empty() {
                config.profiles = profiles;
            }
            debug!(?config, "resolved configuration");

            let mut generator = Generator::new(config).context("configure generator")?;
            let report = generator.run().context("generate workload files")?;
            info!(
                files = report.profiles.len(),
                dir = %generator.config().output_dir.display(),
                "generation complete"
            );
        }
        Command::Inspect { paths } => {
            for path in collect_workload_files(&paths)? {
                let stats = inspect_file(&path)?;
                println!("== {} ==", path.display());
                print_stats(&stats);
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "dfsgen=debug,workload=debug"
        } else {
            "dfsgen=info,workload=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: GeneratorConfig =
        serde_json::from_str(&contents).context("parse config json")?;
    Ok(config)
}

fn parse_profile(value: &str) -> Result<Profile, String> {
    let (name, prob_write) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PROB_WRITE, got {value:?}"))?;
    let prob_write: f64 = prob_write
        .trim()
        .parse()
        .map_err(|err| format!("invalid write probability {prob_write:?}: {err}"))?;
    Ok(Profile::with_write_ratio(name.trim(), prob_write))
}

fn collect_workload_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("read dir {}", path.display()))? {
            let entry_path = entry?.path();
            let is_txt = entry_path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
            if entry_path.is_file() && is_txt {
                entries.push(entry_path);
            }
        }
        entries.sort();
        files.extend(entries);
    }
    Ok(files)
}

fn print_stats(stats: &WorkloadStats) {
    println!(
        "commands: {} writes: {} reads: {} write ratio: {:.3}",
        stats.total,
        stats.writes,
        stats.reads,
        stats.write_ratio()
    );
    println!("targets:");
    for (file, counts) in &stats.by_file {
        println!(
            "  {file}: {} writes, {} reads",
            counts.writes, counts.reads
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_profile_complements_read() {
        let profile = parse_profile("MOSTLY_WRITE=0.8").unwrap();
        assert_eq!(profile.name, "MOSTLY_WRITE");
        assert!((profile.prob_write - 0.8).abs() < f64::EPSILON);
        assert!((profile.prob_read - 0.2).abs() < 1e-12);
    }

    #[test]
    fn parse_profile_rejects_garbage() {
        assert!(parse_profile("RANDOM").is_err());
        assert!(parse_profile("RANDOM=half").is_err());
    }

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "dfsgen",
            "generate",
            "--out-dir",
            "out",
            "--seed",
            "7",
            "--profile",
            "INIT_FILES=1",
            "--profile",
            "RANDOM=0.5",
        ])
        .unwrap();
        match cli.command {
            Command::Generate { seed, profiles, .. } => {
                assert_eq!(seed, Some(7));
                assert_eq!(profiles.len(), 2);
                assert!(profiles[0].is_initialization());
            }
            Command::Inspect { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn load_config_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r#"{"commands_per_file": 5, "profiles": [{"name": "RANDOM", "prob_write": 0.5, "prob_read": 0.5}]}"#,
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.commands_per_file, 5);
        assert_eq!(config.file_count, GeneratorConfig::default().file_count);
        assert_eq!(config.profiles.len(), 1);
    }

    #[test]
    fn collect_sorts_directory_entries() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::write(tmp.path().join("notes.md"), "").unwrap();
        let files = collect_workload_files(&[tmp.path().to_path_buf()]).unwrap();
        assert_eq!(
            files,
            vec![tmp.path().join("a.txt"), tmp.path().join("b.txt")]
        );
    }
}

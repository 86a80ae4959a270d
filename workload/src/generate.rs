//! Record generation.
//!
//! Records are built as typed values first and rendered in a single pass,
//! so generation and formatting can be tested independently.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::command::Command;

/// Payload carried by every initialization write.
pub const INITIAL_PAYLOAD: &str = "INITIAL WRITE";

/// Payload of the write at 1-based `position` in a generated file.
#[must_use]
pub fn write_payload(position: usize) -> String {
    format!("This is command number {position}.")
}

/// One write per target file, in order, each with [`INITIAL_PAYLOAD`].
#[must_use]
pub fn build_initialization_contents(files: &[String]) -> Vec<Command> {
    files
        .iter()
        .map(|file| Command::write(file.as_str(), INITIAL_PAYLOAD))
        .collect()
}

/// Draws `command_count` records against `prob_write`.
///
/// Each position first draws write-vs-read, then draws the target file
/// uniformly. Returns no records when `files` is empty.
pub fn build_random_contents<R: Rng + ?Sized>(
    files: &[String],
    command_count: usize,
    prob_write: f64,
    rng: &mut R,
) -> Vec<Command> {
    if files.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::with_capacity(command_count);
    for position in 1..=command_count {
        let is_write = rng.gen::<f64>() < prob_write;
        let Some(file) = files.choose(rng) else {
            break;
        };
        let record = if is_write {
            Command::write(file.as_str(), write_payload(position))
        } else {
            Command::read(file.as_str())
        };
        records.push(record);
    }
    records
}

/// Renders records one per line, each terminated by `\n`.
#[must_use]
pub fn render_contents(records: &[Command]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}

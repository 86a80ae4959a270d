//! Command records and their line format.
//!
//! A record renders as one comma-separated line:
//!
//! ```text
//! write, <file>, <payload>
//! read, <file>
//! ```
//!
//! Parsing follows the consuming client: split on `,`, trim every field,
//! and require exactly three fields for `write` and two for `read`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Separator placed between fields of a rendered record.
pub const FIELD_SEPARATOR: &str = ", ";

/// The closed set of tags the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandTag {
    Write,
    Read,
}

impl CommandTag {
    /// Returns the tag as it appears on a line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Read => "read",
        }
    }

    /// Number of comma-separated fields a line with this tag carries.
    #[must_use]
    pub const fn field_count(self) -> usize {
        match self {
            Self::Write => 3,
            Self::Read => 2,
        }
    }
}

impl fmt::Display for CommandTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single operation against a target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Write { file: String, payload: String },
    Read { file: String },
}

impl Command {
    /// Creates a write record.
    pub fn write(file: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::Write {
            file: file.into(),
            payload: payload.into(),
        }
    }

    /// Creates a read record.
    pub fn read(file: impl Into<String>) -> Self {
        Self::Read { file: file.into() }
    }

    #[must_use]
    pub const fn tag(&self) -> CommandTag {
        match self {
            Self::Write { .. } => CommandTag::Write,
            Self::Read { .. } => CommandTag::Read,
        }
    }

    /// The target file name.
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::Write { file, .. } | Self::Read { file } => file,
        }
    }

    /// The payload of a write record.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Write { payload, .. } => Some(payload),
            Self::Read { .. } => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write { file, payload } => write!(
                f,
                "{}{FIELD_SEPARATOR}{file}{FIELD_SEPARATOR}{payload}",
                CommandTag::Write
            ),
            Self::Read { file } => write!(f, "{}{FIELD_SEPARATOR}{file}", CommandTag::Read),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(line)
    }
}

/// Renders a record as a single line without a terminator.
#[must_use]
pub fn format_record(record: &Command) -> String {
    record.to_string()
}

/// Parses a single line into a record.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let raw_tag = fields[0];
    if raw_tag.is_empty() {
        return Err(ParseError::Empty);
    }

    let tag = if raw_tag.eq_ignore_ascii_case(CommandTag::Write.as_str()) {
        CommandTag::Write
    } else if raw_tag.eq_ignore_ascii_case(CommandTag::Read.as_str()) {
        CommandTag::Read
    } else {
        return Err(ParseError::UnknownTag {
            tag: raw_tag.to_string(),
        });
    };

    if fields.len() != tag.field_count() {
        return Err(ParseError::FieldCount {
            tag: tag.as_str(),
            expected: tag.field_count(),
            found: fields.len(),
        });
    }
    if fields[1..].iter().any(|field| field.is_empty()) {
        return Err(ParseError::EmptyField { tag: tag.as_str() });
    }

    Ok(match tag {
        CommandTag::Write => Command::write(fields[1], fields[2]),
        CommandTag::Read => Command::read(fields[1]),
    })
}

/// Parses every non-blank line of a workload file.
pub fn parse_contents(text: &str) -> Result<Vec<Command>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_line(line).map_err(|err| ParseError::AtLine {
                line: idx + 1,
                source: Box::new(err),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_write_record() {
        let record = Command::write("file3.txt", "This is command number 4.");
        assert_eq!(
            format_record(&record),
            "write, file3.txt, This is command number 4."
        );
    }

    #[test]
    fn format_read_record_has_no_trailing_separator() {
        let record = Command::read("file1.txt");
        assert_eq!(format_record(&record), "read, file1.txt");
    }

    #[test]
    fn parse_trims_fields() {
        let record: Command = "  write ,file2.txt ,  INITIAL WRITE ".parse().unwrap();
        assert_eq!(record, Command::write("file2.txt", "INITIAL WRITE"));
    }

    #[test]
    fn parse_read() {
        assert_eq!(parse_line("read, file9.txt"), Ok(Command::read("file9.txt")));
    }

    #[test]
    fn parse_rejects_unused_tags() {
        for line in ["ls", "submit, requests.txt"] {
            assert!(matches!(
                parse_line(line),
                Err(ParseError::UnknownTag { .. })
            ));
        }
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert_eq!(
            parse_line("read, file1.txt, extra"),
            Err(ParseError::FieldCount {
                tag: "read",
                expected: 2,
                found: 3,
            })
        );
        assert_eq!(
            parse_line("write, file1.txt"),
            Err(ParseError::FieldCount {
                tag: "write",
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn parse_rejects_blank_fields() {
        assert_eq!(
            parse_line("write, , payload"),
            Err(ParseError::EmptyField { tag: "write" })
        );
        assert_eq!(parse_line(""), Err(ParseError::Empty));
    }

    #[test]
    fn parse_contents_reports_line_numbers() {
        let text = "read, file1.txt\n\nls\n";
        let err = parse_contents(text).unwrap_err();
        assert!(matches!(err, ParseError::AtLine { line: 3, .. }));
    }

    #[test]
    fn accessors() {
        let record = Command::write("file1.txt", "x");
        assert_eq!(record.tag(), CommandTag::Write);
        assert_eq!(record.file(), "file1.txt");
        assert_eq!(record.payload(), Some("x"));
        assert_eq!(Command::read("file2.txt").payload(), None);
    }
}

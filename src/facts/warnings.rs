use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::io::{self, Write};

const SEPARATOR: &str = "------------------------------";
const COLUMN_PADDING: usize = 3;

/// Non-fatal collection failures, keyed by the dotted configuration path that produced them.
///
/// A source path may accumulate several messages; they are kept in insertion order and only
/// sorted when printed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Warnings {
    warnings: BTreeMap<String, Vec<String>>,
}

impl Warnings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning against `source`.
    pub fn add(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.warnings.entry(source.into()).or_default().push(message.into());
    }

    /// Drop every recorded warning.
    pub fn clear(&mut self) {
        self.warnings.clear();
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Total number of recorded messages across all sources.
    #[must_use]
    pub fn count(&self) -> usize {
        self.warnings.values().map(Vec::len).sum()
    }

    /// Messages recorded for a single source path, in the order they were added.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&[String]> {
        self.warnings.get(source).map(Vec::as_slice)
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.warnings.keys().map(String::as_str)
    }

    /// Write the warnings as an aligned table sorted by source, then message.
    ///
    /// Nothing at all is written when there are no warnings.
    pub fn print<W: Write>(&self, writer: &mut W, use_colors: bool) -> io::Result<()> {
        if !self.has_warnings() {
            return Ok(());
        }

        let header = format!("{SEPARATOR}\nwarnings: {}", self.count());
        if use_colors {
            writeln!(writer, "{}", header.yellow())?;
        } else {
            writeln!(writer, "{header}")?;
        }
        writeln!(writer)?;

        let width = self.warnings.keys().map(|source| source.len() + 2).max().unwrap_or(0) + COLUMN_PADDING;

        for (source, messages) in &self.warnings {
            let mut messages: Vec<&str> = messages.iter().map(String::as_str).collect();
            messages.sort_unstable();

            let label = format!("[{source}]");
            for message in messages {
                let line = format!("{label:<width$}{message}");
                if use_colors {
                    writeln!(writer, "{}", line.yellow())?;
                } else {
                    writeln!(writer, "{line}")?;
                }
            }
        }

        writeln!(writer)
    }
}

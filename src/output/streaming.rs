//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line as
//! soon as the walker produces it, for use with `StreamingWalker`.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::size::human_size;
use crate::tree::{EntryKind, LAST_BRANCH, StreamingOutput, VisibleEntry, WalkSummary, connector};

use super::config::OutputConfig;
use super::palette::Role;

pub const ROOT_ICON: &str = "📂";
pub const FOLDER_ICON: &str = "📁";
pub const FILE_ICON: &str = "📄";
pub const PERMISSION_DENIED: &str = "🔒 [Permission Denied]";

/// Streaming output formatter - writes directly to stdout by default.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::with_writer(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `text` in the color assigned to `role`.
    fn write_styled(&mut self, role: Role, text: &str) -> io::Result<()> {
        if self.config.use_color {
            self.out.set_color(self.config.palette.get(role))?;
        }
        write!(self.out, "{}", text)?;
        if self.config.use_color {
            self.out.reset()?;
        }
        Ok(())
    }

    fn write_file(&mut self, name: &str, size: u64, is_last: bool, prefix: &str) -> io::Result<()> {
        let human = human_size(size);
        let value_role = if size == 0 {
            Role::SizeZero
        } else {
            Role::SizeNonZero
        };

        self.write_styled(
            Role::FileLabel,
            &format!("{}{}{} {} (", prefix, connector(is_last), FILE_ICON, name),
        )?;
        self.write_styled(value_role, &human.value_str())?;
        write!(self.out, " ")?;
        self.write_styled(Role::SizeUnit, human.unit())?;
        writeln!(self.out, ")")
    }
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<W> {
    fn output_root(&mut self, root: &Path) -> io::Result<()> {
        let shown = root.display().to_string();
        let label = format!("{} {}/", ROOT_ICON, shown.trim_end_matches('/'));
        self.write_styled(Role::RootLabel, &label)?;
        writeln!(self.out)
    }

    fn output_node(&mut self, entry: &VisibleEntry, is_last: bool, prefix: &str) -> io::Result<()> {
        match entry.kind {
            EntryKind::Directory => {
                let line = format!(
                    "{}{}{} {}/",
                    prefix,
                    connector(is_last),
                    FOLDER_ICON,
                    entry.name
                );
                self.write_styled(Role::FolderLabel, &line)?;
                writeln!(self.out)
            }
            EntryKind::File { size } => self.write_file(&entry.name, size, is_last, prefix),
        }
    }

    fn output_unreadable(&mut self, prefix: &str) -> io::Result<()> {
        let line = format!("{}{}{}", prefix, LAST_BRANCH, PERMISSION_DENIED);
        self.write_styled(Role::PermissionError, &line)?;
        writeln!(self.out)
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}

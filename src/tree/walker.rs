//! StreamingWalker - streams entries without building the tree in memory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::vec;

use super::config::WalkerConfig;
use super::utils::child_prefix;

/// What a visible entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File { size: u64 },
}

/// A directory entry that survived filtering.
#[derive(Debug, Clone)]
pub struct VisibleEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Counts gathered during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    /// Directories (root included) whose listing failed.
    pub unreadable: usize,
}

/// Callback for streaming output - receives each line's content in tree order.
pub trait StreamingOutput {
    /// Header line naming the walk root.
    fn output_root(&mut self, root: &Path) -> io::Result<()>;

    /// One visible entry drawn below `prefix`.
    fn output_node(&mut self, entry: &VisibleEntry, is_last: bool, prefix: &str)
    -> io::Result<()>;

    /// Placeholder for a directory that could not be listed.
    fn output_unreadable(&mut self, prefix: &str) -> io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()>;
}

/// A directory whose visible entries are still being emitted.
struct Frame {
    prefix: String,
    entries: vec::IntoIter<VisibleEntry>,
}

/// Depth-first tree walker.
///
/// Pending directories live on an explicit stack instead of the call stack,
/// so arbitrarily deep trees cannot overflow it.
pub struct StreamingWalker {
    config: WalkerConfig,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root` and stream every visible entry to `output`.
    ///
    /// Only errors from `output` are returned; filesystem failures are
    /// reported through the output or skipped.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> io::Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let mut stack = Vec::new();

        output.output_root(root)?;
        self.enter_dir(root, String::new(), &mut stack, output, &mut summary)?;

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.next() else {
                stack.pop();
                continue;
            };
            let is_last = frame.entries.len() == 0;

            output.output_node(&entry, is_last, &frame.prefix)?;

            match entry.kind {
                EntryKind::Directory => {
                    summary.directories += 1;
                    let prefix = child_prefix(&frame.prefix, is_last);
                    self.enter_dir(&entry.path, prefix, &mut stack, output, &mut summary)?;
                }
                EntryKind::File { .. } => summary.files += 1,
            }
        }

        output.finish(&summary)?;
        Ok(summary)
    }

    /// Push a frame for `path`, or report it as unreadable.
    fn enter_dir<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: String,
        stack: &mut Vec<Frame>,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> io::Result<()> {
        match self.read_visible_entries(path) {
            Ok(entries) => stack.push(Frame {
                prefix,
                entries: entries.into_iter(),
            }),
            Err(e) => {
                log::debug!("cannot list {}: {}", path.display(), e);
                summary.unreadable += 1;
                output.output_unreadable(&prefix)?;
            }
        }
        Ok(())
    }

    /// Read, sort and filter the entries of one directory.
    ///
    /// Excluded names and files whose metadata cannot be read are dropped
    /// here, so the last element is the last entry actually drawn.
    fn read_visible_entries(&self, path: &Path) -> io::Result<Vec<VisibleEntry>> {
        let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|e| e.file_name());

        Ok(entries
            .into_iter()
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                if self.config.is_excluded(&name) {
                    return None;
                }
                let path = entry.path();
                let kind = match entry_kind(&entry) {
                    Ok(kind) => kind,
                    Err(e) => {
                        log::debug!("skipping {}: {}", path.display(), e);
                        return None;
                    }
                };
                Some(VisibleEntry { name, path, kind })
            })
            .collect())
    }
}

/// Classify an entry without following symlinks.
fn entry_kind(entry: &fs::DirEntry) -> io::Result<EntryKind> {
    if entry.file_type()?.is_dir() {
        Ok(EntryKind::Directory)
    } else {
        Ok(EntryKind::File {
            size: entry.metadata()?.len(),
        })
    }
}

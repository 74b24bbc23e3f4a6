//! Source manager: owns file buffers and maps offsets to coordinates.

use std::path::Path;
use std::sync::OnceLock;

use indexmap::IndexMap;
use log::debug;

use crate::error::SourceError;

use super::{FileId, Span};

/// A registered source file.
///
/// Immutable after registration. The line-start index is built lazily on
/// the first coordinate lookup; the `OnceLock` guard makes concurrent
/// builds idempotent, so a shared `SourceManager` can serve parallel lexer
/// instances read-only.
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Box<str>,
    /// Byte offsets where each line begins, in ascending order.
    line_starts: OnceLock<Box<[u32]>>,
}

impl SourceFile {
    fn new(id: FileId, name: String, content: Box<str>) -> SourceFile {
        SourceFile {
            id,
            name,
            content,
            line_starts: OnceLock::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Line-start offsets, computing them on first use.
    fn line_starts(&self) -> &[u32] {
        self.line_starts.get_or_init(|| {
            let mut starts = vec![0u32];
            for (i, byte) in self.content.bytes().enumerate() {
                if byte == b'\n' {
                    starts.push(i as u32 + 1);
                }
            }
            starts.into_boxed_slice()
        })
    }

    /// Number of lines (a trailing newline does not start a new line
    /// unless bytes follow it; an empty file has one line).
    pub fn line_count(&self) -> usize {
        self.line_starts().len()
    }

    /// Map a byte offset to 1-based (line, column). Columns count bytes.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let starts = self.line_starts();
        let line = match starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert) => insert - 1,
        };
        let col = offset - starts[line] + 1;
        (line as u32 + 1, col)
    }

    /// The text of a 1-based line, without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let starts = self.line_starts();
        let start = *starts.get(line as usize - 1)? as usize;
        let end = starts
            .get(line as usize)
            .map(|s| *s as usize)
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("len", &self.content.len())
            .finish()
    }
}

/// A resolved, human-readable source position.
///
/// `line` and the columns refer to the span's start; `column_end` is the
/// column just past the span on the line the span ends on. Lines and
/// columns are 1-based, columns count bytes; tab expansion is the
/// diagnostic renderer's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub name: &'a str,
    pub line: u32,
    pub column_start: u32,
    pub column_end: u32,
}

/// Owns all registered source buffers and assigns stable [`FileId`]s.
///
/// # Examples
///
/// ```
/// use photonc_util::span::{SourceManager, Span};
///
/// let mut sources = SourceManager::new();
/// let file = sources.add_virtual("demo.pt", "fn main() {}");
/// let loc = sources.resolve(Span::new(file, 3, 4)).unwrap();
/// assert_eq!(loc.line, 1);
/// assert_eq!(loc.column_start, 4);
/// ```
#[derive(Default)]
pub struct SourceManager {
    files: Vec<SourceFile>,
    /// Registered name -> id, so repeated loads of one path share a buffer.
    by_name: IndexMap<String, FileId>,
}

impl SourceManager {
    pub fn new() -> SourceManager {
        SourceManager::default()
    }

    /// Read a file from disk and register it.
    ///
    /// Loading a path that is already registered returns the existing id
    /// without touching the filesystem again.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<FileId, SourceError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        if let Some(id) = self.by_name.get(&name) {
            return Ok(*id);
        }
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.register(name, content.into_boxed_str()))
    }

    /// Register in-memory content under a virtual name.
    pub fn add_virtual(&mut self, name: impl Into<String>, content: impl Into<Box<str>>) -> FileId {
        self.register(name.into(), content.into())
    }

    fn register(&mut self, name: String, content: Box<str>) -> FileId {
        let id = FileId(self.files.len() as u32);
        debug!("registering source {:?} as {:?} ({} bytes)", name, id, content.len());
        self.files.push(SourceFile::new(id, name.clone(), content));
        self.by_name.insert(name, id);
        id
    }

    #[inline]
    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    /// The raw buffer of a registered file.
    pub fn content(&self, id: FileId) -> Result<&str, SourceError> {
        self.get(id)
            .map(SourceFile::content)
            .ok_or(SourceError::UnknownFile(id))
    }

    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Resolve a span to filename, line, and byte columns.
    ///
    /// Returns `None` for an unregistered file id or a span that violates
    /// the `offset + len <= buffer.len` invariant.
    pub fn resolve(&self, span: Span) -> Option<Resolved<'_>> {
        let file = self.get(span.file)?;
        if span.end() as usize > file.content().len() {
            return None;
        }
        let (line, column_start) = file.line_col(span.offset);
        let (_, column_end) = file.line_col(span.end());
        Some(Resolved {
            name: file.name(),
            line,
            column_start,
            column_end,
        })
    }
}

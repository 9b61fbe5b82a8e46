//! Filesystem access for documents and the path picker
//!
//! All disk access goes through the `FileSystem` trait so the editor can be
//! driven against other backends in tests:
//! - `StdFileSystem`: Native filesystem using `std::fs`
//!
//! `read_all` / `write_all` are the document-level entry points. They turn
//! `io::Error`s into a typed `FileIoError` that the command layer can show to
//! the user instead of aborting.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// Directory Entry Types
// ============================================================================

/// Type of filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    File,
    Directory,
}

/// A directory entry returned by `read_dir`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Full path to the entry
    pub path: PathBuf,
    /// File/directory name (last component of path)
    pub name: String,
    pub entry_type: EntryType,
}

impl DirEntry {
    pub fn new(path: PathBuf, name: String, entry_type: EntryType) -> Self {
        Self {
            path,
            name,
            entry_type,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    /// Hidden files start with `.`
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Metadata about a file or directory
#[derive(Debug, Clone, Default)]
pub struct FileMetadata {
    pub is_dir: bool,
}

// ============================================================================
// FileSystem Trait
// ============================================================================

/// Synchronous filesystem operations used by the editor.
///
/// Calls block the event thread; documents are assumed small and local.
pub trait FileSystem: Send + Sync {
    /// Read entire file into memory
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write data to a file, creating it or truncating existing content
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    /// List entries in a directory (non-recursive)
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata>;

    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.metadata(path).map(|m| m.is_dir).unwrap_or(false)
    }
}

/// Standard filesystem implementation using `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        use std::io::Write;
        let mut file = std::fs::File::create(path)?;
        file.write_all(data)?;
        file.flush()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            // Follow symlinks so a link to a directory can be descended into
            let is_dir = std::fs::metadata(&path)
                .map(|m| m.is_dir())
                .unwrap_or(false);
            let entry_type = if is_dir {
                EntryType::Directory
            } else {
                EntryType::File
            };
            entries.push(DirEntry::new(path, name, entry_type));
        }
        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let meta = std::fs::metadata(path)?;
        Ok(FileMetadata {
            is_dir: meta.is_dir(),
        })
    }
}

// ============================================================================
// Document I/O
// ============================================================================

/// Which document operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

/// Classified cause of a document I/O failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIoErrorKind {
    NotFound,
    PermissionDenied,
    IsDirectory,
    /// The file exists but its bytes are not valid UTF-8 text
    InvalidText,
    Other,
}

/// A failed document read or write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIoError {
    pub path: PathBuf,
    pub op: FileOp,
    pub kind: FileIoErrorKind,
    pub message: String,
}

impl FileIoError {
    fn from_io(path: &Path, op: FileOp, err: &io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => FileIoErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => FileIoErrorKind::PermissionDenied,
            io::ErrorKind::IsADirectory => FileIoErrorKind::IsDirectory,
            io::ErrorKind::InvalidData => FileIoErrorKind::InvalidText,
            _ => FileIoErrorKind::Other,
        };
        Self {
            path: path.to_path_buf(),
            op,
            kind,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for FileIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.op {
            FileOp::Read => "open",
            FileOp::Write => "save",
        };
        let reason = match self.kind {
            FileIoErrorKind::NotFound => "file not found".to_string(),
            FileIoErrorKind::PermissionDenied => "permission denied".to_string(),
            FileIoErrorKind::IsDirectory => "is a directory".to_string(),
            FileIoErrorKind::InvalidText => "not valid UTF-8 text".to_string(),
            FileIoErrorKind::Other => self.message.clone(),
        };
        write!(f, "Cannot {} {}: {}", verb, self.path.display(), reason)
    }
}

impl std::error::Error for FileIoError {}

/// Read a whole document as text
pub fn read_all(fs: &dyn FileSystem, path: &Path) -> Result<String, FileIoError> {
    if fs.is_dir(path) {
        return Err(FileIoError {
            path: path.to_path_buf(),
            op: FileOp::Read,
            kind: FileIoErrorKind::IsDirectory,
            message: "is a directory".to_string(),
        });
    }
    let bytes = fs
        .read_file(path)
        .map_err(|e| FileIoError::from_io(path, FileOp::Read, &e))?;
    String::from_utf8(bytes).map_err(|e| FileIoError {
        path: path.to_path_buf(),
        op: FileOp::Read,
        kind: FileIoErrorKind::InvalidText,
        message: e.to_string(),
    })
}

/// Write a whole document, replacing whatever the file held before
pub fn write_all(fs: &dyn FileSystem, path: &Path, content: &str) -> Result<(), FileIoError> {
    if fs.is_dir(path) {
        return Err(FileIoError {
            path: path.to_path_buf(),
            op: FileOp::Write,
            kind: FileIoErrorKind::IsDirectory,
            message: "is a directory".to_string(),
        });
    }
    fs.write_file(path, content.as_bytes())
        .map_err(|e| FileIoError::from_io(path, FileOp::Write, &e))
}

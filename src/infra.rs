//! Infrastructure traits for abstracting I/O operations.
//!
//! Report loading, config loading and output writing go through [`FileSystem`]
//! so they can be exercised against in-memory implementations in tests.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file, replacing its contents.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;

    /// Append a slice of bytes to a file, creating it if needed.
    fn append(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn append(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(contents.as_ref())
    }
}

impl<FS: FileSystem + ?Sized> FileSystem for &FS {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn append(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        (**self).append(path, contents)
    }
}

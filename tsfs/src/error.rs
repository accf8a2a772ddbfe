use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Listed path is absent or not a regular file. Scanning skips these.
    #[error("file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("volume name {name:?} of {} is {len} bytes, at most {max} allowed", .path.display(), max = crate::NAME_LEN)]
    NameTooLong {
        path: PathBuf,
        name: String,
        len: usize,
    },

    #[error("{} has no valid UTF-8 file name", .path.display())]
    InvalidName { path: PathBuf },

    #[error("{} is {size} bytes, larger than a volume can describe", .path.display())]
    FileTooLarge { path: PathBuf, size: u64 },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFailure { path: PathBuf, source: io::Error },

    #[error("{} changed while building: scanned {expected} bytes, read {actual}", .path.display())]
    SourceChanged {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("volume of {size} bytes does not fit the 32-bit format")]
    VolumeTooLarge { size: u64 },

    #[error("layout describes {layout} files, {files} were given")]
    LayoutMismatch { layout: usize, files: usize },

    #[error("data region starts at {actual}, layout expects {expected}")]
    RegionMisaligned { expected: u64, actual: u64 },

    #[error("mismatching volume size: header indicates {expected} bytes, wrote {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("failed to write volume: {0}")]
    Write(#[source] io::Error),

    #[error("failed to encode on-disk structure: {0}")]
    Encode(#[from] binrw::Error),
}

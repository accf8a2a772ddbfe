//! # 卷构建层
//!
//! 收集输入文件，计算布局并写出整个卷。

use std::io::Write;
use std::path::Path;

use crate::{compute_layout, scan, serialize, Error, FileDescriptor, Layout, Result};

/// Collects files and writes them out as one volume.
///
/// Each builder owns its own file list; nothing is shared between builders.
#[derive(Debug, Default, Clone)]
pub struct VolumeBuilder {
    files: Vec<FileDescriptor>,
}

impl VolumeBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every existing file among `paths`, in order.
    pub fn add_files<I, P>(&mut self, paths: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files.extend(scan(paths)?);
        Ok(self)
    }

    #[inline]
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        compute_layout(&self.files)
    }

    /// Writes the whole volume into `sink` and returns its size.
    ///
    /// Fails with [`Error::SizeMismatch`] if the bytes written disagree with
    /// the size recorded in the header; `sink` then holds an invalid image.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<u64> {
        let layout = self.layout();
        let written = serialize(&self.files, &layout, sink)?;

        if written != layout.volume_size {
            return Err(Error::SizeMismatch {
                expected: layout.volume_size,
                actual: written,
            });
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn builders_do_not_share_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        fs::write(&a, b"a").unwrap();

        let mut first = VolumeBuilder::new();
        first.add_files([&a]).unwrap();
        let second = VolumeBuilder::new();

        assert_eq!(first.files().len(), 1);
        assert!(second.files().is_empty());
    }

    #[test]
    fn add_files_appends() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"a").unwrap();
        fs::write(&b, b"bb").unwrap();

        let mut builder = VolumeBuilder::new();
        builder.add_files([&a]).unwrap().add_files([&b]).unwrap();

        let sizes: Vec<_> = builder.files().iter().map(FileDescriptor::size).collect();
        assert_eq!(sizes, [1, 2]);
    }

    #[test]
    fn written_size_matches_header() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        fs::write(&a, [1u8; 1000]).unwrap();

        let mut builder = VolumeBuilder::new();
        builder.add_files([&a]).unwrap();
        let mut image = Vec::new();
        let written = builder.write_to(&mut image).unwrap();

        assert_eq!(written, 1536);
        assert_eq!(image.len(), 1536);
    }

    #[test]
    fn vanished_source_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        fs::write(&a, b"soon gone").unwrap();

        let mut builder = VolumeBuilder::new();
        builder.add_files([&a]).unwrap();
        fs::remove_file(&a).unwrap();

        let err = builder.write_to(&mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, Error::ReadFailure { .. }));
    }

    #[test]
    fn modified_source_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        fs::write(&a, b"short").unwrap();

        let mut builder = VolumeBuilder::new();
        builder.add_files([&a]).unwrap();
        fs::write(&a, b"much longer now").unwrap();

        let err = builder.write_to(&mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::SourceChanged {
                expected: 5,
                actual: 15,
                ..
            }
        ));
    }
}

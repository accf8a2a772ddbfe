//! # 卷写出层
//!
//! 严格按 卷头 -> 文件表 -> 填充 -> 文件数据 的顺序顺序写出，
//! 后面区域的偏移依赖前面区域的大小。

use std::fs;
use std::io::Write;

use crate::{
    round_up, Error, FileDescriptor, FileTableEntry, Layout, Result, VolumeHeader, BLOCK_SIZE,
};

static ZEROS: [u8; BLOCK_SIZE] = [0; BLOCK_SIZE];

/// Sink wrapper tracking how many bytes went out.
struct Counted<'a, W: Write> {
    inner: &'a mut W,
    written: u64,
}

impl<W: Write> Counted<'_, W> {
    fn put(&mut self, buf: &[u8]) -> Result<()> {
        self.inner.write_all(buf).map_err(Error::Write)?;
        self.written += buf.len() as u64;
        Ok(())
    }

    /// Writes zeros until the total is a multiple of [`BLOCK_SIZE`].
    fn pad_to_block(&mut self) -> Result<()> {
        let pad = (round_up(self.written) - self.written) as usize;
        self.put(&ZEROS[..pad])
    }
}

fn narrow(value: u64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::VolumeTooLarge { size: value })
}

/// Writes a complete volume of `files` laid out by `layout` into `sink`.
///
/// `layout` must have been computed from the same `files`. Returns the number
/// of bytes written, which the caller checks against `layout.volume_size`.
/// Nothing is written when the layout covers a different number of files or
/// the volume cannot be described in 32 bits.
pub fn serialize<W: Write>(files: &[FileDescriptor], layout: &Layout, sink: &mut W) -> Result<u64> {
    if layout.file_count() != files.len() {
        return Err(Error::LayoutMismatch {
            layout: layout.file_count(),
            files: files.len(),
        });
    }

    let volume_size = narrow(layout.volume_size)?;
    let file_count = narrow(files.len() as u64)?;
    let offsets = layout
        .per_file_offsets
        .iter()
        .map(|&offset| narrow(offset))
        .collect::<Result<Vec<_>>>()?;

    let mut out = Counted {
        inner: sink,
        written: 0,
    };

    out.put(&VolumeHeader::new(volume_size, file_count).to_bytes()?)?;
    log::debug!("header: volume_size={volume_size} file_count={file_count}");

    for (file, &offset) in files.iter().zip(&offsets) {
        let entry = FileTableEntry::new(offset, file.size(), file.volume_name());
        out.put(&entry.to_bytes()?)?;
    }

    out.pad_to_block()?;
    if out.written != layout.data_region_start {
        return Err(Error::RegionMisaligned {
            expected: layout.data_region_start,
            actual: out.written,
        });
    }
    log::debug!("file table: {file_count} entries, data starts at {}", out.written);

    for file in files {
        let data = fs::read(file.source_path()).map_err(|source| Error::ReadFailure {
            path: file.source_path().to_owned(),
            source,
        })?;
        if data.len() as u64 != file.size() as u64 {
            return Err(Error::SourceChanged {
                path: file.source_path().to_owned(),
                expected: file.size() as u64,
                actual: data.len() as u64,
            });
        }

        log::debug!(
            "payload {:?}: {} bytes at {}",
            file.source_path(),
            data.len(),
            out.written
        );
        out.put(&data)?;
        out.pad_to_block()?;
    }

    out.inner.flush().map_err(Error::Write)?;

    Ok(out.written)
}

//! # 布局计算层
//!
//! 根据文件大小算出各区域大小与每个文件的起始偏移，不做任何 I/O。

use crate::{FileDescriptor, BLOCK_SIZE, FILE_ENTRY_SIZE, HEADER_SIZE};

const BLOCK: u64 = BLOCK_SIZE as u64;

/// Number of blocks `size` bytes occupy. An empty file occupies none.
#[inline]
pub const fn blocks(size: u64) -> u64 {
    size.div_ceil(BLOCK)
}

/// `size` rounded up to the next block boundary.
#[inline]
pub const fn round_up(size: u64) -> u64 {
    blocks(size) * BLOCK
}

/// Byte geometry of one volume, derived from its files in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub header_region_size: u64,
    pub table_region_size: u64,
    /// First byte after the header, the table and their padding
    pub data_region_start: u64,
    pub volume_size: u64,
    pub per_file_offsets: Vec<u64>,
}

/// Derives the layout of a volume holding `files`, in table order.
pub fn compute_layout(files: &[FileDescriptor]) -> Layout {
    let header_region_size = HEADER_SIZE as u64;
    let table_region_size = (FILE_ENTRY_SIZE * files.len()) as u64;
    let data_region_start = round_up(header_region_size + table_region_size);

    let mut per_file_offsets = Vec::with_capacity(files.len());
    let mut cursor = data_region_start;
    for file in files {
        per_file_offsets.push(cursor);
        cursor += round_up(file.size() as u64);
    }

    Layout {
        header_region_size,
        table_region_size,
        data_region_start,
        volume_size: cursor,
        per_file_offsets,
    }
}

impl Layout {
    #[inline]
    pub fn file_count(&self) -> usize {
        self.per_file_offsets.len()
    }

    /// Bytes the `index`-th file occupies in the payload region, padding included.
    pub fn extent(&self, index: usize) -> Option<u64> {
        let start = *self.per_file_offsets.get(index)?;
        let end = self
            .per_file_offsets
            .get(index + 1)
            .copied()
            .unwrap_or(self.volume_size);
        Some(end - start)
    }

    /// Zero bytes between the end of the file table and the data region.
    #[inline]
    pub fn table_padding(&self) -> u64 {
        self.data_region_start - self.header_region_size - self.table_region_size
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    fn files_of(dir: &Path, sizes: &[usize]) -> Vec<FileDescriptor> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let path = dir.join(format!("f{i}"));
                fs::write(&path, vec![0xa5u8; size]).unwrap();
                FileDescriptor::from_path(path).unwrap()
            })
            .collect()
    }

    #[test]
    fn block_counts() {
        assert_eq!(blocks(0), 0);
        assert_eq!(blocks(1), 1);
        assert_eq!(blocks(511), 1);
        assert_eq!(blocks(512), 1);
        assert_eq!(blocks(513), 2);
        assert_eq!(round_up(600), 1024);
        assert_eq!(round_up(0), 0);
    }

    #[test]
    fn empty_volume() {
        let layout = compute_layout(&[]);

        assert_eq!(layout.header_region_size, 16);
        assert_eq!(layout.table_region_size, 0);
        assert_eq!(layout.data_region_start, 512);
        assert_eq!(layout.volume_size, 512);
        assert_eq!(layout.table_padding(), 496);
        assert!(layout.per_file_offsets.is_empty());
        assert_eq!(layout.extent(0), None);
    }

    #[test]
    fn offsets_accumulate_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_of(dir.path(), &[600, 0, 100, 512]);
        let layout = compute_layout(&files);

        assert_eq!(layout.table_region_size, 64);
        assert_eq!(layout.per_file_offsets, [512, 1536, 1536, 2048]);
        assert_eq!(layout.volume_size, 2560);
        assert_eq!(layout.extent(0), Some(1024));
        assert_eq!(layout.extent(1), Some(0));
        assert_eq!(layout.extent(2), Some(512));
        assert_eq!(layout.extent(3), Some(512));
        assert_eq!(layout.extent(4), None);
    }

    #[test]
    fn full_table_block_needs_no_padding() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_of(dir.path(), &[0; 31]);
        let layout = compute_layout(&files);

        assert_eq!(layout.data_region_start, 512);
        assert_eq!(layout.table_padding(), 0);
        assert_eq!(layout.volume_size, 512);
    }

    #[test]
    fn table_spills_into_second_block() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_of(dir.path(), &[1; 32]);
        let layout = compute_layout(&files);

        assert_eq!(layout.data_region_start, 1024);
        assert_eq!(layout.volume_size, 1024 + 32 * 512);
        assert!(layout
            .per_file_offsets
            .iter()
            .all(|offset| offset % 512 == 0 && *offset >= layout.data_region_start));
    }
}

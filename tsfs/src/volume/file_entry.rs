use std::io::Cursor;
use std::path::Path;

use binrw::{BinRead, BinWrite};

use crate::{Error, Result, FILE_ENTRY_SIZE, NAME_LEN};

fn until_nul(name: &[u8; NAME_LEN]) -> &[u8] {
    let len = name.iter().position(|&c| c == 0).unwrap_or(NAME_LEN);
    &name[..len]
}

/// Name of a file on the volume: the host base name, right-padded with NUL.
///
/// A name of exactly [`NAME_LEN`] bytes carries no terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumeName([u8; NAME_LEN]);

impl VolumeName {
    /// Derives the volume name from the final component of `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidName {
                path: path.to_owned(),
            })?;

        let bytes = name.as_bytes();
        if bytes.len() > NAME_LEN {
            return Err(Error::NameTooLong {
                path: path.to_owned(),
                name: name.to_owned(),
                len: bytes.len(),
            });
        }

        let mut padded = [0; NAME_LEN];
        padded[..bytes.len()].copy_from_slice(bytes);

        Ok(Self(padded))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; NAME_LEN] {
        &self.0
    }

    /// Name bytes up to the first NUL.
    #[inline]
    pub fn trimmed(&self) -> &[u8] {
        until_nul(&self.0)
    }
}

/// 文件表项：文件数据在卷中的偏移、原始大小与文件名
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(big)]
pub struct FileTableEntry {
    /// Offset of the first payload byte, always block aligned
    offset: u32,
    /// Unpadded file size in bytes
    size: u32,
    name: [u8; NAME_LEN],
}

impl FileTableEntry {
    #[inline]
    pub fn new(offset: u32, size: u32, name: &VolumeName) -> Self {
        Self {
            offset,
            size,
            name: *name.as_bytes(),
        }
    }

    pub fn to_bytes(&self) -> binrw::BinResult<[u8; FILE_ENTRY_SIZE]> {
        let mut buf = [0; FILE_ENTRY_SIZE];
        BinWrite::write(self, &mut Cursor::new(&mut buf[..]))?;
        Ok(buf)
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn name(&self) -> &[u8] {
        until_nul(&self.name)
    }
}

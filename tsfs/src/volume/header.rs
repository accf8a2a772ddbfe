use std::io::Cursor;

use binrw::{BinRead, BinWrite};

use crate::{HEADER_SIZE, VERSION};

/// 卷头：
/// - 提供文件系统合法性校验（标识）；
/// - 记录整个卷的大小与文件数量
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
// binrw only takes a literal magic, keep it equal to `IDENTITY`.
#[brw(big, magic = 0x17c1u16)]
pub struct VolumeHeader {
    version: u8,
    _reserved1: u8,
    /// Size of the entire volume, header included
    volume_size: u32,
    file_count: u32,
    _reserved2: u32,
}

impl VolumeHeader {
    #[inline]
    pub fn new(volume_size: u32, file_count: u32) -> Self {
        Self {
            version: VERSION,
            _reserved1: 0,
            volume_size,
            file_count,
            _reserved2: 0,
        }
    }

    pub fn to_bytes(&self) -> binrw::BinResult<[u8; HEADER_SIZE]> {
        let mut buf = [0; HEADER_SIZE];
        BinWrite::write(self, &mut Cursor::new(&mut buf[..]))?;
        Ok(buf)
    }

    #[inline]
    pub fn version(&self) -> u8 {
        self.version
    }

    #[inline]
    pub fn volume_size(&self) -> u32 {
        self.volume_size
    }

    #[inline]
    pub fn file_count(&self) -> u32 {
        self.file_count
    }
}

//! Host-side builder for Tiny Simple File System (TSFS) volume images.
//!
//! A volume is a flat, read-only image laid out as
//! header | file table | padding | block-padded payloads,
//! meant to be burned onto block storage and mounted by a small device.

/* tsfs 的整体架构，自上而下 */

// 卷构建层：收集输入文件并写出完整的卷
mod builder;
pub use builder::VolumeBuilder;

// 卷写出层：按固定顺序写出各区域
mod serializer;
pub use serializer::serialize;

// 布局计算层：各区域大小与文件偏移
mod layout;
pub use layout::{blocks, compute_layout, round_up, Layout};

// 输入层：扫描宿主机上的文件
mod descriptor;
pub use descriptor::{scan, FileDescriptor};

// 磁盘数据结构层：卷头与文件表项
pub mod volume;
pub use volume::{FileTableEntry, VolumeHeader, VolumeName};

mod error;
pub use error::{Error, Result};

/// Unique ID identifying a TSFS volume.
pub const IDENTITY: u16 = 0x17c1;
/// Only format version in existence.
pub const VERSION: u8 = 1;
pub const BLOCK_SIZE: usize = 512;
/// Max bytes of a file name on the volume.
pub const NAME_LEN: usize = 8;
pub const HEADER_SIZE: usize = 16;
pub const FILE_ENTRY_SIZE: usize = 16;
/// Files a device without huge memory support can mount.
pub const DEVICE_MAX_FILES: usize = 31;

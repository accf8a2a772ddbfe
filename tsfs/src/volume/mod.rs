//! # 磁盘数据结构层
//!
//! tsfs 的卷布局，所有多字节整数均为大端序：
//! 卷头 | 文件表 | 填充至块边界 | 文件数据(各自填充至块边界)

mod header;
pub use header::VolumeHeader;

mod file_entry;
pub use file_entry::{FileTableEntry, VolumeName};

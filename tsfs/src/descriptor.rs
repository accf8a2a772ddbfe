//! # 输入层
//!
//! 把宿主机上的路径列表转换为待打包的文件描述。

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result, VolumeName, DEVICE_MAX_FILES};

/// A host file scheduled for packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    source_path: PathBuf,
    volume_name: VolumeName,
    size: u32,
}

impl FileDescriptor {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => {
                return Err(Error::InputNotFound {
                    path: path.to_owned(),
                })
            }
        };

        let volume_name = VolumeName::from_path(path)?;
        let size = u32::try_from(metadata.len()).map_err(|_| Error::FileTooLarge {
            path: path.to_owned(),
            size: metadata.len(),
        })?;

        Ok(Self {
            source_path: path.to_owned(),
            volume_name,
            size,
        })
    }

    #[inline]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    #[inline]
    pub fn volume_name(&self) -> &VolumeName {
        &self.volume_name
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }
}

/// Builds one descriptor per existing regular file, keeping caller order.
///
/// Missing inputs are skipped with a warning; any other problem aborts.
pub fn scan<I, P>(paths: I) -> Result<Vec<FileDescriptor>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for path in paths {
        match FileDescriptor::from_path(path) {
            Ok(file) => {
                if !seen.insert(file.volume_name) {
                    log::warn!(
                        "duplicate volume name {:?}, the device will only open the first",
                        String::from_utf8_lossy(file.volume_name.trimmed())
                    );
                }
                files.push(file);
            }
            Err(err @ Error::InputNotFound { .. }) => log::warn!("{err}, skipping"),
            Err(err) => return Err(err),
        }
    }

    if files.len() > DEVICE_MAX_FILES {
        log::warn!(
            "{} files exceed the {DEVICE_MAX_FILES} a device without huge memory can mount",
            files.len()
        );
    }

    Ok(files)
}


use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tsfs::VolumeBuilder;

#[derive(Debug, Error)]
pub enum PackError {
    #[error(transparent)]
    Volume(#[from] tsfs::Error),

    #[error("{}: {source}", .path.display())]
    Output { path: PathBuf, source: io::Error },
}

/// Image file that only appears under its final name once committed.
///
/// Bytes go to a hidden sibling `.<name>.tmp`; dropping the file without
/// [`ImageFile::commit`] removes that temporary, so a failed build never
/// leaves a partial image behind.
#[derive(Debug)]
pub struct ImageFile {
    tmp_path: PathBuf,
    final_path: PathBuf,
    writer: BufWriter<File>,
    armed: bool,
}

impl ImageFile {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, PackError> {
        let final_path = path.as_ref().to_owned();
        let tmp_path = match final_path.file_name() {
            Some(name) => {
                let mut tmp_name = OsString::from(".");
                tmp_name.push(name);
                tmp_name.push(".tmp");
                final_path.with_file_name(tmp_name)
            }
            None => {
                return Err(PackError::Output {
                    path: final_path,
                    source: io::Error::new(io::ErrorKind::InvalidInput, "not a file path"),
                })
            }
        };

        let fd = File::create(&tmp_path).map_err(|source| PackError::Output {
            path: tmp_path.clone(),
            source,
        })?;

        Ok(Self {
            tmp_path,
            final_path,
            writer: BufWriter::new(fd),
            armed: true,
        })
    }

    pub fn writer(&mut self) -> &mut impl Write {
        &mut self.writer
    }

    /// Flush, fsync, and rename onto the final path.
    pub fn commit(mut self) -> Result<(), PackError> {
        self.writer.flush().map_err(|source| PackError::Output {
            path: self.tmp_path.clone(),
            source,
        })?;
        self.writer
            .get_ref()
            .sync_all()
            .map_err(|source| PackError::Output {
                path: self.tmp_path.clone(),
                source,
            })?;

        fs::rename(&self.tmp_path, &self.final_path).map_err(|source| PackError::Output {
            path: self.final_path.clone(),
            source,
        })?;

        self.armed = false;
        Ok(())
    }
}

impl Drop for ImageFile {
    fn drop(&mut self) {
        if self.armed {
            // Best effort, the build is already failing.
            let _ = fs::remove_file(&self.tmp_path);
        }
    }
}

/// Packs `inputs` into a TSFS image at `output` and returns its size.
///
/// On error `output` is left untouched.
pub fn pack<P: AsRef<Path>>(inputs: &[P], output: impl AsRef<Path>) -> Result<u64, PackError> {
    let mut builder = VolumeBuilder::new();
    builder.add_files(inputs)?;

    let mut image = ImageFile::create(output)?;
    let written = builder.write_to(image.writer())?;
    image.commit()?;

    Ok(written)
}

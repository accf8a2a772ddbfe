use clap::Parser;
use std::path::PathBuf;

/// Combine FILES into a Tiny Simple File System (TSFS) image.
#[derive(Parser)]
#[command(name = "mkfs-tsfs")]
pub struct Cli {
    /// Write the TSFS image to FILE
    #[arg(long, short, value_name = "FILE", default_value = "raw.out")]
    pub output: PathBuf,

    /// Files to pack, in table order. Directories are stripped from the names
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use env_logger::Env;
use typed_bytesize::ByteSizeIec;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    log::info!("Generating Tiny Simple File System image...");
    match tsfs_fuse::pack(&cli.files, &cli.output) {
        Ok(written) => {
            log::info!(
                "Completed: image file {:?} done, wrote {written} bytes ({})",
                cli.output,
                ByteSizeIec(written)
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(2)
        }
    }
}

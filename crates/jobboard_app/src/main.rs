mod shell;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use shell::{LogDestination, ShellConfig};

/// Terminal shell for browsing, saving and applying to job listings.
#[derive(Debug, Parser)]
#[command(name = "jobboard", version)]
struct Args {
    /// Listing source endpoint.
    #[arg(long, default_value = "https://empllo.com/api/v1")]
    endpoint: String,

    /// Directory holding the durable saved-jobs blob. Defaults to the
    /// platform data directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Mirror the log to ./jobboard.log as well as the terminal.
    #[arg(long)]
    log_file: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => directories::ProjectDirs::from("io", "jobboard", "jobboard")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("could not determine a platform data directory")?,
    };

    let log = if args.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };

    shell::run(ShellConfig {
        endpoint: args.endpoint,
        data_dir,
        log,
    })
}

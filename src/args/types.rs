use clap::Parser;
use std::path::PathBuf;

use super::validators::{check_readable_dir, check_readable_file, parse_concurrency, parse_upload_host};
use crate::deploy::UploadOptions;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Upload a build's dist directory to object storage", long_about = None)]
pub struct Args {
    /// Project root containing build-config.json
    #[arg(
        short = 'r',
        long,
        value_name = "DIR",
        default_value = ".",
        value_parser = check_readable_dir
    )]
    pub build_root: PathBuf,

    /// Build config file, defaults to <BUILD_ROOT>/build-config.json
    #[arg(short = 'c', long, value_name = "FILE", value_parser = check_readable_file)]
    pub build_config: Option<PathBuf>,

    /// Upload host to use instead of the configured ones. Can be used multiple times.
    #[arg(long = "upload-host", value_name = "HOST", value_parser = parse_upload_host)]
    pub upload_hosts: Vec<String>,

    /// Maximum uploads in flight (default: all at once)
    #[arg(long, value_name = "N", value_parser = parse_concurrency)]
    pub concurrency: Option<usize>,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl From<&Args> for UploadOptions {
    fn from(args: &Args) -> Self {
        Self {
            build_root: args.build_root.clone(),
            build_config: args.build_config.clone(),
            upload_hosts: args.upload_hosts.clone(),
            concurrency: args.concurrency,
        }
    }
}

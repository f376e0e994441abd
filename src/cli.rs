//! Command line arguments.

use crate::output::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Calculate subnets assigned to a number of OpenVPN daemons.",
    long_about = None
)]
pub struct Args {
    /// VPN address space
    #[arg(short, long, value_name = "x.x.x.x/y")]
    pub address_space: String,

    /// Number of subnets
    ///
    /// At least 1; 0 is refused here even though it would split into a single
    /// subnet. The count is rounded up to the next power of two.
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        default_value_t = 2,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub subnets: u64,

    /// Produce script consumable output
    #[arg(short, long)]
    pub batch: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// log4rs YAML file to configure logging with instead of -v
    #[arg(long, value_name = "FILE")]
    pub log_config: Option<PathBuf>,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.batch {
            OutputFormat::Batch
        } else {
            OutputFormat::Human
        }
    }
}

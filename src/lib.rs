//! Split a VPN address space into equally sized subnets, one per OpenVPN
//! daemon, and report each subnet's mask and server address.

pub mod cli;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use cli::Args;
use models::Ipv4;
use output::subnet_print;
use processing::split_subnets;
use std::error::Error;
use std::io::Write;

/// Parse, split and print according to `args`. Returns the number of subnets written.
///
/// Address-space and range errors are raised before anything reaches `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<u64, Box<dyn Error>> {
    log::info!("#Start run() address_space={}", args.address_space);

    let space = Ipv4::new(&args.address_space)?;
    log::debug!(
        "address space {space} ({} addresses), {} subnets requested",
        space.num_addresses(),
        args.subnets
    );
    let subnets = split_subnets(space, args.subnets)?;

    let written = subnet_print(out, subnets, args.output_format())?;
    Ok(written)
}

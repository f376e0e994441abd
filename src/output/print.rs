//! Writing a split to an output stream.

use super::batch::format_batch;
use super::terminal::format_subnet;
use crate::models::Ipv4;
use std::io::{self, Write};

/// Which line layout [`subnet_print`] writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Subnet #1: 255.255.255.128 or 10.0.0.0/25 server host: 10.0.0.1`
    #[default]
    Human,
    /// `10.0.0.0 255.255.255.128 10.0.0.1`
    Batch,
}

/// Write one line per subnet, numbered from 1, and return how many were written.
pub fn subnet_print<W, I>(out: &mut W, subnets: I, format: OutputFormat) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Ipv4>,
{
    log::info!("#Start subnet_print() format={format:?}");
    let mut count = 0u64;
    for subnet in subnets {
        count += 1;
        let line = match format {
            OutputFormat::Human => format_subnet(count, &subnet),
            OutputFormat::Batch => format_batch(&subnet),
        };
        writeln!(out, "{line}")?;
    }
    log::info!("# Wrote {count} subnet lines");
    Ok(count)
}

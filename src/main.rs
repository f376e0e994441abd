use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use vpn_subnets::cli::Args;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    if let Err(e) = vpn_subnets::logging::init_logging(args.verbose, args.log_config.as_deref()) {
        eprintln!("{} logging not initialised: {e}", "warning:".yellow().bold());
    }
    log::info!("#Start main()");

    match execute(&args) {
        Ok(count) => {
            log::info!("#End main() {count} subnets");
            ExitCode::SUCCESS
        }
        Err(e) if is_broken_pipe(e.as_ref()) => {
            log::debug!("stdout closed early");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("run failed: {e:?}");
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<u64, Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = vpn_subnets::run(args, &mut out)?;
    out.flush()?;
    Ok(count)
}

fn is_broken_pipe(e: &(dyn Error + 'static)) -> bool {
    e.downcast_ref::<io::Error>()
        .map_or(false, |e| e.kind() == io::ErrorKind::BrokenPipe)
}

//! log4rs setup. Everything goes to stderr so stdout only carries subnets.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

/// Map the `-v` count to a level, starting at warnings.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Build the default stderr-only configuration.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger, from `config_file` when given.
pub fn init_logging(verbose: u8, config_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match config_file {
        Some(path) => {
            log4rs::init_file(path, Default::default())?;
            log::debug!("logging configured from {}", path.display());
        }
        None => {
            log4rs::init_config(stderr_config(level_for(verbose))?)?;
        }
    }
    Ok(())
}

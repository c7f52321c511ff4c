use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr; dependencies stay at `Warn` whatever the verbosity.
pub fn init(verbosity: u8) -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level(env!("CARGO_CRATE_NAME"), level(verbosity))
        .init()?;

    Ok(())
}

fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

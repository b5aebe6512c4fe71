use anyhow::Result;
use simple_logger::SimpleLogger;

const DEFAULT_LEVEL: log::LevelFilter = log::LevelFilter::Info;

pub fn init() -> Result<()> {
    SimpleLogger::new()
        .with_level(DEFAULT_LEVEL)
        // keep the http stack quiet unless something is wrong
        .with_module_level("reqwest", log::LevelFilter::Warn)
        .with_module_level("hyper", log::LevelFilter::Warn)
        .init()?;

    Ok(())
}

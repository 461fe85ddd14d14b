use std::str::FromStr;

use log::LevelFilter;

use crate::config::LogConfig;

/// sets up the global logger. Lines go to stdout and, if configured, are appended to a file as well
pub fn init_logger(config: &LogConfig) -> Result<(), fern::InitError> {
    let level = LevelFilter::from_str(&config.level).unwrap_or_else(|_| {
        eprintln!("Unknown log level {}, using info", config.level);
        LevelFilter::Info
    });
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("rocket", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .chain(std::io::stdout());
    if let Some(file) = &config.file {
        dispatch = dispatch.chain(fern::log_file(file)?);
    }
    dispatch.apply()?;
    Ok(())
}

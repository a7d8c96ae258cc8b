//! Host-machine layer for the 48K ZX Spectrum.
//!
//! The simulation crate drives the hardware only through the [`Machine`]
//! trait: port reads for the keyboard and joystick, port writes for the
//! border and speaker, and a 6144+768 byte screen in the stock interleaved
//! layout. A headless [`BufferMachine`] implementation is provided for the
//! runner binary and for tests.

use log::{LevelFilter, SetLoggerError};
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub mod machine;
pub mod ports;
pub mod screen;

pub use machine::{BufferMachine, Machine};
pub use screen::{Rect, Screen};

pub fn initialize_logger(
    log_level: LevelFilter,
    file_path: Option<&str>,
) -> Result<(), SetLoggerError> {
    // Build a stderr logger - always for now.
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();

    let mut config_builder = Config::builder();

    let mut root_builder = Root::builder();

    if let Some(path) = file_path {
        if let Ok(logfile) = FileAppender::builder()
            // Pattern: https://docs.rs/log4rs/*/log4rs/encode/pattern/index.html
            .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
            .build(path)
        {
            config_builder =
                config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
            root_builder = root_builder.appender("logfile");
        }
    }

    // Log the programmatically specified level to stderr; the file appender
    // (when configured) receives everything the root level allows.
    let config = config_builder
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stderr", Box::new(stderr)),
        )
        .build(root_builder.appender("stderr").build(log_level))
        .expect("log config is statically valid");

    // Use this to change log levels at runtime.
    let _handle = log4rs::init_config(config)?;

    Ok(())
}

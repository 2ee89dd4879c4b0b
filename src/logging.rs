use std::io::Write;

use log::LevelFilter;

use crate::error::LoggingError;

/// Initializes `env_logger`.
///
/// `RUST_LOG` is read first and `level` then overrides its global level, so
/// per-module directives such as `RUST_LOG=facegrid::source=debug` still apply.
/// Decoder crates are held at `Warn`.
pub fn init_logger(level: LevelFilter) -> Result<(), LoggingError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("image", LevelFilter::Warn);
    builder.filter_module("png", LevelFilter::Warn);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}",
            buf.timestamp_seconds(),
            record.level(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

/// Level from `RUST_LOG` when it is a bare level name, `Info` otherwise.
pub fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

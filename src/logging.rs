use std::io::{self, Write};
use log::{LevelFilter, Log, Metadata, Record};

/// Logger that writes timestamped records to stderr.
///
/// Stdout is reserved for the emitted stylesheet, so diagnostics go to the
/// stream shells and pipelines expect them on.
struct StderrLogger {
    max_level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                io::stderr(),
                "[{}] [{}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Initialize stderr logging; `verbose` raises the level from info to debug
pub fn init_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let max_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    log::set_boxed_logger(Box::new(StderrLogger { max_level }))
        .map(|()| log::set_max_level(max_level))
}

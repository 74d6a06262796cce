use log::{Level, LevelFilter, Log, Metadata, Record};

/// Browser console sink for the `log` facade.
///
/// Each line is tagged with the record target, which is the module path for
/// plain `log::info!` calls and the component name for the `*_with_component`
/// helpers.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the logger; later calls are no-ops
    pub fn init() {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

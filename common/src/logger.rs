use std::io::Write;
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    enabled: bool,
}

impl Logger {
    fn new(prefix: Option<String>, enabled: bool) -> Self {
        Self { prefix, enabled }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    // Game output owns stdout, so log lines go to stderr.
    pub fn log(&self, file: &str, line: u32, message: &str) {
        if !self.enabled {
            return;
        }
        let formatted = self.format_line(file, line, message);
        let _ = writeln!(std::io::stderr().lock(), "{}", formatted);
    }
}

pub fn init_logger(prefix: Option<String>, enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, enabled));
}

/// Silently drops messages until [`init_logger`] has run, so library code
/// can log from tests and benches without any setup.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

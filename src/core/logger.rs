use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use log::{
    LevelFilter,
    Metadata,
    Record
};

static LOGGER: CrateLogger = CrateLogger {
    console: AtomicBool::new(true),
    file: Mutex::new(None),
};

struct CrateLogger {
    console: AtomicBool,
    file: Mutex<Option<File>>,
}

impl log::Log for CrateLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        if self.console.load(Ordering::Relaxed) {
            println!("{}", line);
        }

        if let Ok(mut guard) = self.file.lock() {
            if let Some(fp) = guard.as_mut() {
                _ = writeln!(fp, "{}", line);
            }
        }
    }

    fn flush(&self) {
        _ = io::stdout().flush();
        if let Ok(mut guard) = self.file.lock() {
            if let Some(fp) = guard.as_mut() {
                _ = fp.flush();
            }
        }
    }
}

pub fn setup(level: LevelFilter, file: Option<&str>) {
    let fp = file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Opening log file {} error: {e}", path))
            .ok()
    });

    if let Ok(mut guard) = LOGGER.file.lock() {
        *guard = fp;
    }
    LOGGER.console.store(true, Ordering::Relaxed);

    _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

pub fn revert_console_output() {
    LOGGER.console.store(false, Ordering::Relaxed);
}

pub fn teardown() {
    log::logger().flush();
    log::set_max_level(LevelFilter::Off);
    if let Ok(mut guard) = LOGGER.file.lock() {
        *guard = None;
    }
}

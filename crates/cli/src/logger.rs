//! Logging for easel runs.
//!
//! Every line goes to stderr and, when a log file is given, is appended to
//! it as well. Each run gets an id of the form `{timestamp}_{uuid prefix}`
//! so lines from separate renders appended to one file can be told apart.

use anyhow::{Context, Result};
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static RUN_ID: OnceLock<String> = OnceLock::new();

pub struct EaselLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
    run_id: String,
}

impl EaselLogger {
    pub fn new(level: LevelFilter, log_file: Option<&Path>) -> Result<Self> {
        let file = match log_file {
            Some(path) => Some(Mutex::new(open_log_file(path)?)),
            None => None,
        };

        Ok(Self {
            level,
            file,
            run_id: new_run_id(),
        })
    }

    /// Install the logger for this process.
    pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
        let logger = Self::new(level, log_file)?;
        let run_id = logger.run_id.clone();
        let _ = RUN_ID.set(run_id.clone());

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))?;

        log::debug!("easel logger initialized. Run ID: {}", run_id);
        if let Some(path) = log_file {
            log::debug!("Log file: {}", path.display());
        }
        Ok(())
    }

    /// The run id, once [`EaselLogger::init`] has run.
    pub fn current_run_id() -> Option<&'static str> {
        RUN_ID.get().map(String::as_str)
    }

    fn format(&self, record: &Record) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {} {:<5} [{}] {}",
            timestamp,
            self.run_id,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

fn new_run_id() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let uuid = Uuid::new_v4().to_string();
    let short = uuid.split('-').next().unwrap_or("unknown");
    format!("{timestamp}_{short}")
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

impl Log for EaselLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = self.format(record);

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                // A failed write to the log file must not abort a render.
                let _ = writeln!(file, "{}", message);
            }
        }

        eprintln!("{}", message);
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Map `-v` repetitions onto a level, starting from warnings.
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

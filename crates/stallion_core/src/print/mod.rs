//! Logging for the portal.
//!
//! Every message goes to an in-memory ring (shown in the TUI)
//! and, unless sent with `no_log`, to the log file for the day.
//! Console output is switched off while the TUI owns the terminal,
//! see [`set_print`].

use std::{
    borrow::Cow,
    collections::VecDeque,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        LazyLock, Mutex,
    },
};

use owo_colors::OwoColorize;
use regex::Regex;

use crate::{IntoIoError, Result};

mod macros;

const MEMORY_LOG_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    Info,
    Error,
    Point,
}

impl LogType {
    fn tag(self) -> &'static str {
        match self {
            LogType::Info => "[info]",
            LogType::Error => "[error]",
            LogType::Point => "-",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogLine {
    pub kind: LogType,
    pub time: String,
    pub message: String,
}

impl std::fmt::Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} {}", self.time, self.kind.tag(), self.message)
    }
}

struct LoggingState {
    file: Option<BufWriter<File>>,
    memory: VecDeque<LogLine>,
}

static PRINT: AtomicBool = AtomicBool::new(true);

static LOGGER: LazyLock<Mutex<LoggingState>> = LazyLock::new(|| {
    Mutex::new(LoggingState {
        file: None,
        memory: VecDeque::with_capacity(MEMORY_LOG_LIMIT),
    })
});

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").ok());

/// Whether log messages are echoed to stdout/stderr.
#[must_use]
pub fn is_print() -> bool {
    PRINT.load(Ordering::Relaxed)
}

pub fn set_print(enabled: bool) {
    PRINT.store(enabled, Ordering::Relaxed);
}

/// Opens (or creates) today's log file under `<dir>/logs/`.
///
/// # Errors
/// If the logs directory or file can't be created.
pub fn init_log_file(dir: &Path) -> Result<PathBuf> {
    let logs_dir = dir.join("logs");
    std::fs::create_dir_all(&logs_dir).path(&logs_dir)?;

    let log_path = logs_dir.join(format!("{}.log", chrono::Local::now().format("%Y-%m-%d")));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .path(&log_path)?;

    if let Ok(mut state) = LOGGER.lock() {
        state.file = Some(BufWriter::new(file));
    }
    Ok(log_path)
}

/// Masks e-mail addresses, the only personal data the portal logs.
#[must_use]
pub fn auto_redact(msg: &str) -> Cow<'_, str> {
    match EMAIL_RE.as_ref() {
        Some(re) => re.replace_all(msg, "[redacted email]"),
        None => Cow::Borrowed(msg),
    }
}

/// Backend of the [`info!`](crate::info), [`err!`](crate::err)
/// and [`pt!`](crate::pt) macros.
pub fn emit(kind: LogType, to_file: bool, msg: &str) {
    let redacted = auto_redact(msg);
    if is_print() {
        match kind {
            LogType::Info => println!("{} {redacted}", kind.tag().yellow()),
            LogType::Error => eprintln!("{} {redacted}", kind.tag().red()),
            LogType::Point => println!("{} {redacted}", kind.tag().bold()),
        }
    }
    if to_file {
        print_to_file(&redacted, kind);
    } else {
        print_to_memory(&redacted, kind);
    }
}

pub fn print_to_memory(msg: &str, kind: LogType) {
    if let Ok(mut state) = LOGGER.lock() {
        push_memory(&mut state, line_now(msg, kind));
    }
}

pub fn print_to_file(msg: &str, kind: LogType) {
    let Ok(mut state) = LOGGER.lock() else {
        return;
    };
    let line = line_now(msg, kind);
    if let Some(file) = state.file.as_mut() {
        // A failing log write must never take the portal down.
        _ = writeln!(file, "{line}").and_then(|()| file.flush());
    }
    push_memory(&mut state, line);
}

/// The last `count` lines logged, oldest first.
#[must_use]
pub fn recent_logs(count: usize) -> Vec<LogLine> {
    let Ok(state) = LOGGER.lock() else {
        return Vec::new();
    };
    let skip = state.memory.len().saturating_sub(count);
    state.memory.iter().skip(skip).cloned().collect()
}

fn line_now(msg: &str, kind: LogType) -> LogLine {
    LogLine {
        kind,
        time: chrono::Local::now().format("%H:%M:%S").to_string(),
        message: msg.to_owned(),
    }
}

fn push_memory(state: &mut LoggingState, line: LogLine) {
    if state.memory.len() == MEMORY_LOG_LIMIT {
        state.memory.pop_front();
    }
    state.memory.push_back(line);
}

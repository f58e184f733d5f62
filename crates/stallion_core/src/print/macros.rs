/// Print an informational message.
///
/// Prefix with `no_log,` to keep the line out of the log file
/// (it still lands in the in-memory log).
#[macro_export]
macro_rules! info {
    (no_log, $($arg:tt)*) => {
        $crate::print::emit($crate::print::LogType::Info, false, &format!($($arg)*))
    };
    ($($arg:tt)*) => {
        $crate::print::emit($crate::print::LogType::Info, true, &format!($($arg)*))
    };
}

/// Print an error message
#[macro_export]
macro_rules! err {
    (no_log, $($arg:tt)*) => {
        $crate::print::emit($crate::print::LogType::Error, false, &format!($($arg)*))
    };
    ($($arg:tt)*) => {
        $crate::print::emit($crate::print::LogType::Error, true, &format!($($arg)*))
    };
}

/// Print a point message, i.e. a small step in some process
#[macro_export]
macro_rules! pt {
    (no_log, $($arg:tt)*) => {
        $crate::print::emit($crate::print::LogType::Point, false, &format!($($arg)*))
    };
    ($($arg:tt)*) => {
        $crate::print::emit($crate::print::LogType::Point, true, &format!($($arg)*))
    };
}

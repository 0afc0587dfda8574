//! Logging macros capturing the call site.
//!
//! Each macro formats its arguments like `format!`, records the current
//! file, enclosing function and line, and submits the record. The result of
//! [`Logger::log`](crate::Logger::log) is returned so that logging outside the
//! running state can be noticed.
//!
//! # Examples
//!
//! ```
//! use async_dual_logger::prelude::*;
//! use async_dual_logger::info;
//!
//! let logger = Logger::builder().console(false).start().unwrap();
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! logger.stop().unwrap();
//! ```

/// Name of the enclosing function, without its module path.
///
/// Closures report the function they are defined in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = __type_name_of(__here);
        let path = path.strip_suffix("::__here").unwrap_or(path);
        path.rsplit("::")
            .find(|segment| *segment != "{{closure}}")
            .unwrap_or(path)
    }};
}

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use async_dual_logger::prelude::*;
/// # let logger = Logger::builder().console(false).start().unwrap();
/// use async_dual_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// # logger.stop().unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            format!($($arg)+),
            file!(),
            $crate::function_name!(),
            line!(),
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture<F: FnOnce(&Logger)>(f: F) -> String {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .console_writer(buffer.clone())
            .use_colors(false)
            .start()
            .unwrap();
        f(&logger);
        logger.stop().unwrap();
        let bytes = buffer.0.lock().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name!(), "test_function_name");
        let from_closure = (|| function_name!())();
        assert_eq!(from_closure, "test_function_name");
    }

    #[test]
    fn test_log_macro_captures_call_site() {
        let expected_line = line!() + 2;
        let output = capture(|logger| {
            log!(logger, LogLevel::Warn, "Formatted: {}", 42).unwrap();
        });

        assert!(output.contains("[WARN]"));
        assert!(output.contains("Formatted: 42"));
        assert!(output.contains(&format!(
            "(macros.rs test_log_macro_captures_call_site:{})",
            expected_line
        )));
    }

    #[test]
    fn test_level_macros() {
        let output = capture(|logger| {
            debug!(logger, "Debug message").unwrap();
            info!(logger, "Items: {}", 100).unwrap();
            warn!(logger, "Retry {} of {}", 1, 3).unwrap();
            error!(logger, "Code: {}", 500).unwrap();
        });

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("[DBUG]") && lines[0].contains("Debug message"));
        assert!(lines[1].contains("[INFO]") && lines[1].contains("Items: 100"));
        assert!(lines[2].contains("[WARN]") && lines[2].contains("Retry 1 of 3"));
        assert!(lines[3].contains("[EROR]") && lines[3].contains("Code: 500"));
    }

    #[test]
    fn test_macro_reports_uninitialized() {
        let logger = Logger::builder().console(false).build();
        assert!(info!(logger, "not started").unwrap_err().is_uninitialized());
    }
}

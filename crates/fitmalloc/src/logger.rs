//! Logger record injected at heap construction.
//!
//! Only compiled with the `logging` feature; without it the log macros in the
//! core expand to nothing and `FixedHeap::new` loses the logger parameter.

use core::fmt;

/// One log callback. The heap never retains the arguments past the call.
pub type LogFn = fn(fmt::Arguments<'_>);

/// Four severity callbacks supplied at init and held by value for the heap's
/// lifetime.
#[derive(Clone, Copy)]
pub struct Logger {
    pub debug: LogFn,
    pub info: LogFn,
    pub warning: LogFn,
    pub error: LogFn,
}

impl Logger {
    /// Discard everything. Handy for benches and tests.
    pub const fn noop() -> Logger {
        fn sink(_: fmt::Arguments<'_>) {}
        Logger {
            debug: sink,
            info: sink,
            warning: sink,
            error: sink,
        }
    }

    /// Forward each level to the `log` facade.
    pub fn log_crate() -> Logger {
        Logger {
            debug: |args| log::debug!("{args}"),
            info: |args| log::info!("{args}"),
            warning: |args| log::warn!("{args}"),
            error: |args| log::error!("{args}"),
        }
    }
}

impl Default for Logger {
    fn default() -> Logger {
        Logger::noop()
    }
}

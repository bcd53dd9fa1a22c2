// Global verbosity system for output control
use std::sync::atomic::{AtomicU8, Ordering};

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(0);

pub fn set_verbosity_level(level: u8) {
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
    if level > 0 {
        println!("📢 Verbosity level: {} (0=summary, 1=info, 2=debug)", level);
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

/// Summary output, always shown.
#[macro_export]
macro_rules! v_summary {
    ($($arg:tt)*) => {
        println!($($arg)*);
    };
}

/// Operational info, shown at -v and above.
#[macro_export]
macro_rules! v_info {
    ($($arg:tt)*) => {
        if $crate::verbosity::get_verbosity_level() >= 1 {
            println!($($arg)*);
        }
    };
}

/// Detailed debug output, shown at -vv.
#[macro_export]
macro_rules! v_debug {
    ($($arg:tt)*) => {
        if $crate::verbosity::get_verbosity_level() >= 2 {
            println!($($arg)*);
        }
    };
}

/// Errors print regardless of verbosity.
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Print a `[DEBUG]` line to stderr when `--debug` is on
pub(crate) fn debug_log(message: impl Display) {
    if debug_enabled() {
        eprintln!("[DEBUG] {message}");
    }
}

/// Non-fatal problem the user should know about; never affects exit status
pub(crate) fn warn(message: impl Display) {
    eprintln!("Warning: {message}");
}

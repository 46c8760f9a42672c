//! Stable exit codes for the interactive binaries.

/// Program finished normally (including "nothing entered" and declined replays).
pub const OK: i32 = 0;
/// Program stopped on an unrecoverable error (config, terminal I/O, persistence).
pub const FAILURE: i32 = 1;

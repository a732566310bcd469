//! Process exit codes (BSD sysexits.h compatible)

/// Successful termination (also used for help/version output)
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Internal software error (e.g., delegate lookup failed)
pub const SOFTWARE: i32 = 70;

/// Can't create output file
pub const CANTCREAT: i32 = 73;

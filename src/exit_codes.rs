//! Exit code constants for the prwd CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, invalid configuration)
//! - 2: Template failure (the prompt template could not be rendered)
//! - 3: Nothing found (no project root above the working directory)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid configuration file.
pub const USER_ERROR: i32 = 1;

/// Template failure: grammar error, unknown command, or oversized output.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Lookup failure: `prwd -f` found no project root.
pub const NOT_FOUND: i32 = 3;

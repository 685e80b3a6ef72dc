//! Exit code constants for the configen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid pattern, unusable path), including
//!   argument parse failures, which clap would otherwise report as 2
//! - 2: Path not found
//! - 3: Malformed input file
//! - 4: Value cannot be encoded in the output format
//! - 5: Filesystem I/O failure
//! - 6: A mapping was required but another value was given

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid regex, or a path that is neither a
/// directory nor a recognized config file.
pub const USER_ERROR: i32 = 1;

/// The input path does not exist.
pub const NOT_FOUND: i32 = 2;

/// A config file failed to decode.
pub const MALFORMED_INPUT: i32 = 3;

/// The merged config could not be encoded in the output format.
pub const UNSUPPORTED_VALUE: i32 = 4;

/// Reading or writing the filesystem failed.
pub const IO_FAILURE: i32 = 5;

/// A document root or `--append` value was not a mapping.
pub const CONFIG_TYPE: i32 = 6;

//! Filesystem utilities for configen.
//!
//! Writes go through [`atomic_write`] so a failed run never leaves a
//! half-written output file behind.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};

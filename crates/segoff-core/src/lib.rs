//! # segoff-core
//!
//! Core library for the segoff layout reporter.
//!
//! This crate provides:
//! - Address capture for a static data symbol and a code pointer
//! - Signed offset arithmetic between the two
//! - Report formatting and output
//!
//! The entry routine itself lives in the binary, so callers hand its
//! address in as an opaque `*const ()`.

pub mod error;
pub mod layout;
pub mod offset;
pub mod report;

use std::io::{self, Write};

use tracing::debug;

pub use error::{Error, Result};
pub use layout::{code_address, counter_address};
pub use offset::Offset;
pub use report::{LABEL, Report};

/// Measure the offset of `entry` from the global counter and print the
/// report line to stdout.
pub fn run(entry: *const ()) -> Result<Offset> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with(entry, &mut handle)
}

/// Same as [`run`], writing to `writer` instead of stdout.
pub fn run_with<W: Write>(entry: *const (), writer: &mut W) -> Result<Offset> {
    let offset = Offset::measure(entry);

    debug!(
        "entry at {:#x}, counter at {:#x}, offset {}",
        code_address(entry),
        counter_address(),
        offset
    );

    Report::new(offset).write_to(writer)?;
    Ok(offset)
}

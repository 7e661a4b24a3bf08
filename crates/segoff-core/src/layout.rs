//! Address capture for the two measured symbols.
//!
//! This is the only module that turns pointers into integers. Everything
//! else works on plain `usize` addresses.

/// Process-wide counter. Its value is never used, only where it lives.
pub static mut GLOBAL_COUNTER: i32 = 0;

/// Returns the address of [`GLOBAL_COUNTER`] in static storage.
#[inline]
pub fn counter_address() -> usize {
    let ptr: *const i32 = &raw const GLOBAL_COUNTER;
    ptr.addr()
}

/// Returns the address of a code pointer, such as a cast `fn` item.
#[inline]
pub fn code_address(entry: *const ()) -> usize {
    entry.addr()
}

//! Marker region lookup.
//!
//! A region starts at the first occurrence of the start marker and ends
//! just before the first end marker after it.

use crate::error::{Error, Result};

/// Declaration of the scancode name table in SDL 2.26's `SDL_keyboard.c`.
pub const ARRAY_START: &str = "static const char *SDL_scancode_names[SDL_NUM_SCANCODES]";
pub const ARRAY_END: &str = "};";

/// Return the text from `start` (inclusive) to the next `end` (exclusive).
pub fn find_region<'a>(source: &'a str, start: &'static str, end: &'static str) -> Result<&'a str> {
    let start_index = source
        .find(start)
        .ok_or(Error::InvalidInputFile { marker: start })?;
    let end_offset = source[start_index..]
        .find(end)
        .ok_or(Error::InvalidInputFile { marker: end })?;
    Ok(&source[start_index..start_index + end_offset])
}

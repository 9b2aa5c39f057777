//! Textual rewrites that turn SDL's scancode table into smgf's.
//!
//! Applied in order:
//!
//! 1. lowercase everything
//! 2. drop `/* N */` index comments
//! 3. join lines
//! 4. collapse the leftover five-space indentation to one space
//! 5. rename the declaration
//! 6. restore `NULL`

use crate::region::ARRAY_START;
use regex::Regex;
use std::sync::LazyLock;

static RE_INDEX_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\* \d+ \*/").unwrap());

/// Four spaces of indentation plus the one that followed the comment.
const INDENT_RUN: &str = "     ";

/// Declaration emitted in place of SDL's.
pub const SMGF_DECLARATION: &str = "static const char* smgf_key_names[]";

/// Rewrite an extracted region (without its end marker).
pub fn rewrite_region(region: &str) -> String {
    let s = region.to_lowercase();
    let s = RE_INDEX_COMMENT.replace_all(&s, "");
    let s = s.replace('\n', "");
    let s = s.replace(INDENT_RUN, " ");
    let s = s.replace(&ARRAY_START.to_lowercase(), SMGF_DECLARATION);
    s.replace("null", "NULL")
}

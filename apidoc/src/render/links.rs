//! Cross-reference rewriting for descriptions.
//!
//! Descriptions written for the editor link to other symbols with ordinary
//! markdown links. On the generated page every symbol is a heading on the
//! same page, so links are rewritten to same-page anchors.

use clap::ValueEnum;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `[label](target)`, label without nested brackets, shortest target.
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\((.*?)\)").unwrap());

/// How a link's anchor is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LinkStyle {
    /// `[label](anything)` → `[label](#label)`
    #[default]
    Label,
    /// Use the target's `#fragment` when it has one, else the label.
    Target,
}

/// Rewrite every markdown link in `text` to a same-page anchor.
pub fn rewrite_links(text: &str, style: LinkStyle) -> String {
    match style {
        LinkStyle::Label => RE_LINK.replace_all(text, "[${1}](#${1})").into_owned(),
        LinkStyle::Target => RE_LINK
            .replace_all(text, |caps: &Captures| {
                let label = &caps[1];
                let anchor = caps[2]
                    .rsplit_once('#')
                    .map(|(_, fragment)| fragment)
                    .filter(|fragment| !fragment.is_empty())
                    .unwrap_or(label);
                format!("[{}](#{})", label, anchor)
            })
            .into_owned(),
    }
}

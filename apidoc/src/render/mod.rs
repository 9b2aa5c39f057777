//! Renderer module — markdown output and link rewriting.

pub mod links;
pub mod markdown;

pub use links::LinkStyle;
pub use markdown::MarkdownRenderer;

//! Docusaurus markdown renderer for the API reference page.
//!
//! Output is byte-stable for a given descriptor sequence: the site diff
//! after a regeneration only shows real documentation changes.

use super::links::{rewrite_links, LinkStyle};
use crate::model::{DocDescriptor, Field};

pub struct MarkdownRenderer {
    /// Front-matter `title`
    pub title: String,
    /// Front-matter `sidebar_position`
    pub sidebar_position: u32,
    /// Language tag on every fenced block
    pub lang: String,
    pub links: LinkStyle,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            title: "API reference".to_string(),
            sidebar_position: 5,
            lang: "lua".to_string(),
            links: LinkStyle::Label,
        }
    }
}

impl MarkdownRenderer {
    /// Render an already filtered and ordered descriptor sequence.
    pub fn render(&self, docs: &[DocDescriptor]) -> String {
        let mut output = String::new();

        output.push_str("---\n");
        output.push_str(&format!("title: {}\n", self.title));
        output.push_str(&format!("sidebar_position: {}\n", self.sidebar_position));
        output.push_str("---\n\n");

        for doc in docs {
            self.render_descriptor(&mut output, doc);
        }

        output
    }

    fn render_descriptor(&self, output: &mut String, doc: &DocDescriptor) {
        output.push_str(&format!("## {}\n\n", doc.name));
        if let Some(ref desc) = doc.description {
            output.push_str(desc.trim());
            output.push('\n');
        }
        output.push('\n');

        for field in &doc.fields {
            self.render_field(output, &doc.name, field);
        }

        // Defines have no heading; they follow the fields in dump order.
        for view in doc.defines.iter().filter_map(|d| d.view()) {
            output.push('\n');
            self.push_fence(output, view);
            output.push('\n');
        }

        output.push_str("\n---\n");
    }

    fn render_field(&self, output: &mut String, parent: &str, field: &Field) {
        // The anchor is the heading text so deep links survive reordering.
        let heading = format!("{}.{}", parent, field.name);
        output.push_str(&format!("### {} {{#{}}}\n\n", heading, heading));

        self.push_fence(output, field.view().unwrap_or_default());
        output.push('\n');

        if let Some(ref desc) = field.description {
            output.push_str(&rewrite_links(desc.trim(), self.links));
            output.push('\n');
        }
        output.push('\n');
    }

    fn push_fence(&self, output: &mut String, code: &str) {
        output.push_str(&format!("```{}\n{}\n```\n", self.lang, code));
    }
}

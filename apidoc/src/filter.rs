//! Descriptor filtering and ordering.
//!
//! Drops dump entries that would only add noise to the reference page and
//! puts the rest into a deterministic order: the root module first, then
//! everything else by name.

use crate::error::Result;
use crate::model::DocDescriptor;
use regex::Regex;
use std::cmp::Ordering;

/// Name segment characters. ASCII only: `é` is not a word character here.
const SEGMENT: &str = "[A-Za-z0-9_]";

pub struct DescriptorFilter {
    root: String,
    /// `<root>.<name>`: a module declared as a bare variable
    module_re: Regex,
    /// `<root>.<module>.<name>`: a fully qualified member
    member_re: Regex,
}

impl DescriptorFilter {
    pub fn new(root: &str) -> Result<Self> {
        let escaped = regex::escape(root);
        Ok(Self {
            root: root.to_string(),
            module_re: Regex::new(&format!(r"^{}\.({}*)$", escaped, SEGMENT))?,
            member_re: Regex::new(&format!(r"^{}\.({}*)\.({}*)$", escaped, SEGMENT, SEGMENT))?,
        })
    }

    /// Returns true if the descriptor is noise for the reference page.
    ///
    /// - module placeholders (`smgf.audio` declared as a variable)
    /// - fully qualified members (`smgf.audio.play`), already listed as
    ///   fields of their module
    /// - the root namespace type itself
    pub fn should_drop(&self, doc: &DocDescriptor) -> bool {
        (doc.kind == "variable" && self.module_re.is_match(&doc.name))
            || self.member_re.is_match(&doc.name)
            || (doc.name == self.root && doc.kind == "type")
    }

    /// The primary descriptor sorts before everything else.
    pub fn is_primary(&self, doc: &DocDescriptor) -> bool {
        doc.name == self.root
    }

    /// Total order: primary first, then lexicographic by name.
    pub fn compare(&self, a: &DocDescriptor, b: &DocDescriptor) -> Ordering {
        self.is_primary(b)
            .cmp(&self.is_primary(a))
            .then_with(|| a.name.cmp(&b.name))
    }

    /// Filter and order a raw descriptor sequence.
    ///
    /// Fields of each surviving descriptor are sorted by name; fields with
    /// no signature are dropped. Defines keep their dump order.
    pub fn apply(&self, docs: Vec<DocDescriptor>) -> Vec<DocDescriptor> {
        let total = docs.len();
        let mut kept: Vec<DocDescriptor> = docs
            .into_iter()
            .filter(|doc| !self.should_drop(doc))
            .map(|mut doc| {
                doc.fields.retain(|field| {
                    let keep = field.view().is_some();
                    if !keep {
                        tracing::warn!(
                            descriptor = %doc.name,
                            field = %field.name,
                            "skipping field without signature"
                        );
                    }
                    keep
                });
                doc.fields.sort_by(|a, b| a.name.cmp(&b.name));
                doc
            })
            .collect();
        kept.sort_by(|a, b| self.compare(a, b));

        tracing::debug!(total, kept = kept.len(), "filtered descriptors");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    fn desc(name: &str, kind: &str) -> DocDescriptor {
        DocDescriptor {
            name: name.to_string(),
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    fn field(name: &str) -> Field {
        Field {
            name: name.to_string(),
            signature: Some("function".to_string()),
            description: None,
        }
    }

    fn names(docs: &[DocDescriptor]) -> Vec<&str> {
        docs.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn drops_all_three_noise_kinds() {
        let filter = DescriptorFilter::new("ns").unwrap();
        let docs = vec![
            desc("ns", "type"),
            desc("ns.audio", "variable"),
            desc("ns.audio.play", "function"),
        ];
        assert!(filter.apply(docs).is_empty());
    }

    #[test]
    fn keeps_module_types_and_other_roots() {
        let filter = DescriptorFilter::new("smgf").unwrap();
        let docs = vec![
            desc("smgf.texture", "type"),
            desc("smgf.audio", "type"),
            desc("smgfx.audio", "variable"),
            desc("other.a.b", "function"),
        ];
        assert_eq!(
            names(&filter.apply(docs)),
            vec!["other.a.b", "smgf.audio", "smgf.texture", "smgfx.audio"]
        );
    }

    #[test]
    fn root_dot_is_not_a_wildcard() {
        let filter = DescriptorFilter::new("a.b").unwrap();
        assert!(!filter.should_drop(&desc("aXb.c", "variable")));
        assert!(filter.should_drop(&desc("a.b.c", "variable")));
    }

    #[test]
    fn non_ascii_segments_are_kept() {
        let filter = DescriptorFilter::new("smgf").unwrap();
        assert!(!filter.should_drop(&desc("smgf.é", "variable")));
        assert!(!filter.should_drop(&desc("smgf.audio.jouér", "function")));
        assert!(filter.should_drop(&desc("smgf.audio_2", "variable")));
    }

    #[test]
    fn primary_sorts_first_wherever_it_starts() {
        let filter = DescriptorFilter::new("smgf").unwrap();
        let docs = vec![
            desc("alpha", "type"),
            desc("smgf.sound", "type"),
            desc("smgf", "variable"),
            desc("beta", "type"),
        ];
        assert_eq!(
            names(&filter.apply(docs)),
            vec!["smgf", "alpha", "beta", "smgf.sound"]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let filter = DescriptorFilter::new("smgf").unwrap();
        let docs = vec![
            desc("smgf", "variable"),
            desc("smgf", "type"),
            desc("smgf.file", "type"),
            desc("smgf.io", "variable"),
            desc("smgf.io.read", "function"),
            desc("zeta", "type"),
        ];
        let once = filter.apply(docs);
        let twice = filter.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn fields_are_sorted_and_unsigned_fields_dropped() {
        let filter = DescriptorFilter::new("smgf").unwrap();
        let mut doc = desc("smgf.audio", "type");
        doc.fields = vec![field("stop"), field("play"), Field::default(), field("pause")];
        let out = filter.apply(vec![doc]);
        let fields: Vec<&str> = out[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["pause", "play", "stop"]);
    }
}

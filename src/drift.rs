//! Drift detection between freshly generated code and a file on disk

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

use crate::checksum::Checksum;

/// One changed line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineChange {
    pub tag: LineTag,
    /// 1-based line number in the side the line belongs to
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTag {
    Removed,
    Added,
}

/// Result of comparing committed code with fresh output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriftReport {
    pub changes: Vec<LineChange>,
    /// Schema digest recorded in the committed file
    pub committed_checksum: Option<Checksum>,
    /// Schema digest of the fresh output
    pub fresh_checksum: Option<Checksum>,
}

impl DriftReport {
    /// Compare the committed file contents against freshly generated code
    pub fn compare(committed: &str, fresh: &str) -> Self {
        let diff = TextDiff::from_lines(committed, fresh);
        let mut changes = Vec::new();

        for change in diff.iter_all_changes() {
            let (tag, index) = match change.tag() {
                ChangeTag::Delete => (LineTag::Removed, change.old_index()),
                ChangeTag::Insert => (LineTag::Added, change.new_index()),
                ChangeTag::Equal => continue,
            };
            changes.push(LineChange {
                tag,
                line: index.map_or(0, |i| i + 1),
                text: change.value().trim_end_matches('\n').to_string(),
            });
        }

        let report = Self {
            changes,
            committed_checksum: Checksum::from_generated(committed),
            fresh_checksum: Checksum::from_generated(fresh),
        };
        tracing::debug!(changed_lines = report.changes.len(), "compared generated code");
        report
    }

    pub fn has_drift(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Whether the schema input itself changed, as opposed to the generator
    pub fn schema_changed(&self) -> bool {
        match (&self.committed_checksum, &self.fresh_checksum) {
            (Some(committed), Some(fresh)) => committed != fresh,
            _ => false,
        }
    }

    /// Unified-style rendering for terminals
    pub fn render(&self) -> String {
        let mut output = String::new();
        for change in &self.changes {
            let sign = match change.tag {
                LineTag::Removed => '-',
                LineTag::Added => '+',
            };
            output.push_str(&format!("{}{:>5} {}\n", sign, change.line, change.text));
        }
        output
    }
}

//! JSON output types for generated contents

use super::contents::{Contents, ContentsEntry};
use serde::{Deserialize, Serialize};

/// Root JSON structure with metadata and the flat entry list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentsOutput {
    pub metadata: ContentsMetadata,
    pub entries: Vec<ContentsEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentsMetadata {
    pub source: Option<String>,
    #[serde(rename = "headingCount")]
    pub heading_count: usize,
    #[serde(rename = "maxDepth")]
    pub max_depth: usize,
}

/// Build the JSON output for `contents`, keeping entries up to `max_level`.
pub fn build_json_output(
    contents: &Contents,
    source: Option<&str>,
    max_level: usize,
) -> ContentsOutput {
    ContentsOutput {
        metadata: ContentsMetadata {
            source: source.map(str::to_string),
            heading_count: contents.len(),
            max_depth: contents.max_depth(),
        },
        entries: contents
            .entries
            .iter()
            .filter(|entry| entry.level <= max_level)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_shape() {
        let contents = Contents::from_text("# Intro\n## Install\n### From Source\n");
        let output = build_json_output(&contents, Some("README.md"), 6);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["metadata"]["source"], "README.md");
        assert_eq!(value["metadata"]["headingCount"], 3);
        assert_eq!(value["metadata"]["maxDepth"], 3);
        assert_eq!(value["entries"][2]["title"], "From Source");
        assert_eq!(value["entries"][2]["slug"], "from-source");
        assert_eq!(value["entries"][2]["path"], serde_json::json!([1, 1, 1]));
    }

    #[test]
    fn test_json_output_filters_by_level() {
        let contents = Contents::from_text("# Intro\n## Install\n### From Source\n");
        let output = build_json_output(&contents, None, 1);

        assert_eq!(output.entries.len(), 1);
        // Metadata describes the whole document
        assert_eq!(output.metadata.heading_count, 3);
        assert!(output.metadata.source.is_none());
    }
}

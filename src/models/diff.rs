use serde::{Deserialize, Serialize};

/// The diff of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResponse {
    #[serde(default)]
    pub from_hash: Option<String>,
    #[serde(default)]
    pub to_hash: Option<String>,
    #[serde(default)]
    pub context_lines: u32,
    #[serde(default)]
    pub whitespace: Option<String>,
    #[serde(default)]
    pub diffs: Vec<Diff>,
    #[serde(default)]
    pub truncated: bool,
}

impl DiffResponse {
    /// Number of files touched
    pub fn files_changed(&self) -> usize {
        self.diffs.len()
    }

    /// Added lines across all files
    pub fn lines_added(&self) -> usize {
        self.diffs.iter().map(Diff::lines_added).sum()
    }

    /// Removed lines across all files
    pub fn lines_removed(&self) -> usize {
        self.diffs.iter().map(Diff::lines_removed).sum()
    }
}

/// Changes to one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diff {
    /// Absent for added files
    #[serde(default)]
    pub source: Option<DiffPath>,
    /// Absent for deleted files
    #[serde(default)]
    pub destination: Option<DiffPath>,
    #[serde(default)]
    pub hunks: Vec<Hunk>,
    #[serde(default)]
    pub truncated: bool,
}

impl Diff {
    /// Path of the file after the change, or before it for deletions
    pub fn path(&self) -> Option<&DiffPath> {
        self.destination.as_ref().or(self.source.as_ref())
    }

    pub fn is_added(&self) -> bool {
        self.source.is_none() && self.destination.is_some()
    }

    pub fn is_deleted(&self) -> bool {
        self.source.is_some() && self.destination.is_none()
    }

    pub fn lines_added(&self) -> usize {
        self.count_lines(SegmentType::Added)
    }

    pub fn lines_removed(&self) -> usize {
        self.count_lines(SegmentType::Removed)
    }

    fn count_lines(&self, kind: SegmentType) -> usize {
        self.hunks
            .iter()
            .flat_map(|hunk| &hunk.segments)
            .filter(|segment| segment.kind == kind)
            .map(|segment| segment.lines.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffPath {
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub extension: Option<String>,
    /// Full path, e.g. `src/lib.rs`
    #[serde(rename = "toString")]
    pub full_path: String,
}

/// A contiguous region of change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hunk {
    pub source_line: u32,
    pub source_span: u32,
    pub destination_line: u32,
    pub destination_span: u32,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(rename = "type")]
    pub kind: SegmentType,
    #[serde(default)]
    pub lines: Vec<DiffLine>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentType {
    Added,
    Removed,
    Context,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    #[serde(default)]
    pub source: u32,
    #[serde(default)]
    pub destination: u32,
    pub line: String,
    #[serde(default)]
    pub truncated: bool,
}

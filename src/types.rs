//! Common types used throughout stashpull
//!
//! Request context and the enumerated query parameters accepted by the
//! pull-request endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Request Context
// ============================================================================

/// Identifies a repository on the server
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    /// Project key (e.g., "PROJ")
    pub project_key: String,
    /// Repository slug (e.g., "my-repo")
    pub repo_slug: String,
}

impl RepoRef {
    /// Create a new repository reference
    pub fn new(project_key: impl Into<String>, repo_slug: impl Into<String>) -> Self {
        Self {
            project_key: project_key.into(),
            repo_slug: repo_slug.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project_key, self.repo_slug)
    }
}

// ============================================================================
// Pull Request State
// ============================================================================

/// Pull request state, also used as a list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PullRequestState {
    #[default]
    Open,
    Merged,
    Declined,
    /// Only meaningful as a filter
    All,
}

impl PullRequestState {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Merged => "MERGED",
            Self::Declined => "DECLINED",
            Self::All => "ALL",
        }
    }
}

// ============================================================================
// Order
// ============================================================================

/// Listing order for pull requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    Oldest,
    #[default]
    Newest,
}

impl Order {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oldest => "OLDEST",
            Self::Newest => "NEWEST",
        }
    }
}

// ============================================================================
// Diff Options
// ============================================================================

/// Whitespace handling for diffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespaceMode {
    /// Show whitespace changes
    #[default]
    Include,
    /// Ignore all whitespace changes
    IgnoreAll,
}

impl WhitespaceMode {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "show",
            Self::IgnoreAll => "ignore-all",
        }
    }
}

/// Whether diff responses embed review comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentMode {
    With,
    #[default]
    Without,
}

impl CommentMode {
    /// Query parameter value for `withComments`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::With => "true",
            Self::Without => "false",
        }
    }
}

/// Parameters for the diff endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffOptions {
    /// Lines of context around each change
    pub context_lines: u32,
    /// Whitespace handling
    pub whitespace: WhitespaceMode,
    /// Comment embedding
    pub comments: CommentMode,
}

impl DiffOptions {
    /// Create diff options with the given context
    pub fn new(context_lines: u32) -> Self {
        Self {
            context_lines,
            ..Default::default()
        }
    }

    /// Set whitespace mode
    #[must_use]
    pub fn whitespace(mut self, whitespace: WhitespaceMode) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Set comment mode
    #[must_use]
    pub fn comments(mut self, comments: CommentMode) -> Self {
        self.comments = comments;
        self
    }
}

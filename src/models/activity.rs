use super::commit::Commit;
use super::user::User;
use chrono::serde::{ts_milliseconds, ts_milliseconds_option};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a pull request's activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u64,
    #[serde(with = "ts_milliseconds")]
    pub created_date: DateTime<Utc>,
    pub user: User,
    pub action: ActivityAction,
    /// `ADDED`, `EDITED`, `REPLIED` or `DELETED`, for comment activity
    #[serde(default)]
    pub comment_action: Option<String>,
    #[serde(default)]
    pub comment: Option<Comment>,
    /// Set on `RESCOPED` activity
    #[serde(default)]
    pub added_commits: Vec<Commit>,
    #[serde(default)]
    pub removed_commits: Vec<Commit>,
    /// Set on `UPDATED` activity that changed reviewers
    #[serde(default)]
    pub added_reviewers: Vec<User>,
    #[serde(default)]
    pub removed_reviewers: Vec<User>,
}

/// Kind of activity
///
/// Values this version does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityAction {
    Approved,
    Commented,
    Declined,
    Merged,
    Opened,
    Reopened,
    Rescoped,
    Reviewed,
    Unapproved,
    Updated,
    Other(String),
}

impl ActivityAction {
    /// Wire value
    pub fn as_str(&self) -> &str {
        match self {
            Self::Approved => "APPROVED",
            Self::Commented => "COMMENTED",
            Self::Declined => "DECLINED",
            Self::Merged => "MERGED",
            Self::Opened => "OPENED",
            Self::Reopened => "REOPENED",
            Self::Rescoped => "RESCOPED",
            Self::Reviewed => "REVIEWED",
            Self::Unapproved => "UNAPPROVED",
            Self::Updated => "UPDATED",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for ActivityAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "APPROVED" => Self::Approved,
            "COMMENTED" => Self::Commented,
            "DECLINED" => Self::Declined,
            "MERGED" => Self::Merged,
            "OPENED" => Self::Opened,
            "REOPENED" => Self::Reopened,
            "RESCOPED" => Self::Rescoped,
            "REVIEWED" => Self::Reviewed,
            "UNAPPROVED" => Self::Unapproved,
            "UPDATED" => Self::Updated,
            _ => Self::Other(value),
        }
    }
}

impl From<ActivityAction> for String {
    fn from(action: ActivityAction) -> Self {
        match action {
            ActivityAction::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comment and its replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    #[serde(default)]
    pub version: u32,
    pub text: String,
    pub author: User,
    #[serde(with = "ts_milliseconds")]
    pub created_date: DateTime<Utc>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated_date: Option<DateTime<Utc>>,
    /// Direct replies, oldest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Comment {
    /// This comment followed by every reply below it, depth first
    pub fn thread(&self) -> CommentThread<'_> {
        CommentThread { stack: vec![self] }
    }

    /// Number of replies at any depth
    pub fn reply_count(&self) -> usize {
        self.thread().count() - 1
    }
}

/// Depth-first walk over a comment tree
pub struct CommentThread<'a> {
    stack: Vec<&'a Comment>,
}

impl<'a> Iterator for CommentThread<'a> {
    type Item = &'a Comment;

    fn next(&mut self) -> Option<&'a Comment> {
        let comment = self.stack.pop()?;
        self.stack.extend(comment.comments.iter().rev());
        Some(comment)
    }
}

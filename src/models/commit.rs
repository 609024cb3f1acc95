use chrono::serde::ts_milliseconds_option;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit included in a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub id: String,
    #[serde(default)]
    pub display_id: Option<String>,
    pub author: Person,
    #[serde(default, with = "ts_milliseconds_option")]
    pub author_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub committer: Option<Person>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub committer_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub parents: Vec<CommitRef>,
}

impl Commit {
    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Whether this commit has more than one parent
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// Git identity of an author or committer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRef {
    pub id: String,
    #[serde(default)]
    pub display_id: Option<String>,
}

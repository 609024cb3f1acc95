use super::user::User;
use crate::types::PullRequestState;
use chrono::serde::{ts_milliseconds, ts_milliseconds_option};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A pull request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub id: u64,
    #[serde(default)]
    pub version: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub state: PullRequestState,
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub closed: bool,
    #[serde(with = "ts_milliseconds")]
    pub created_date: DateTime<Utc>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated_date: Option<DateTime<Utc>>,
    /// Only reported by servers that track it, and only once closed
    #[serde(default, with = "ts_milliseconds_option")]
    pub closed_date: Option<DateTime<Utc>>,
    pub from_ref: Ref,
    pub to_ref: Ref,
    #[serde(default)]
    pub locked: bool,
    pub author: Participant,
    #[serde(default)]
    pub reviewers: Vec<Participant>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl PullRequest {
    /// Reviewers that approved
    pub fn approvals(&self) -> usize {
        self.reviewers.iter().filter(|r| r.approved).count()
    }

    /// Time from creation to close, if closed and the server reported when
    pub fn time_to_close(&self) -> Option<Duration> {
        self.closed_date.map(|closed| closed - self.created_date)
    }
}

/// A branch or tag in a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ref {
    /// Fully qualified ref, e.g. `refs/heads/master`
    pub id: String,
    #[serde(default)]
    pub display_id: Option<String>,
    #[serde(default)]
    pub latest_commit: Option<String>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A user's involvement in a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub user: User,
    /// `AUTHOR`, `REVIEWER` or `PARTICIPANT`
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub approved: bool,
    /// `APPROVED`, `UNAPPROVED` or `NEEDS_WORK`
    #[serde(default)]
    pub status: Option<String>,
}

//! Domain entities returned by the pull-request endpoints
//!
//! All entities are plain values decoded per response. Fields the server adds
//! beyond those declared here are ignored. Timestamps arrive as epoch
//! milliseconds and are exposed as `DateTime<Utc>`.

mod activity;
mod commit;
mod diff;
mod new_pull_request;
mod pull_request;
mod user;

pub use activity::{Activity, ActivityAction, Comment, CommentThread};
pub use commit::{Commit, CommitRef, Person};
pub use diff::{Diff, DiffLine, DiffPath, DiffResponse, Hunk, Segment, SegmentType};
pub use new_pull_request::{NewPullRequest, ProjectSpec, RefSpec, RepoSpec};
pub use pull_request::{Participant, Project, PullRequest, Ref, Repository};
pub use user::User;

#[cfg(test)]
mod tests;

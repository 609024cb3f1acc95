//! Tests for the domain models

use super::*;
use crate::types::PullRequestState;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn user(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "emailAddress": format!("{name}@example.com"),
        "id": 101,
        "displayName": name.to_uppercase(),
        "active": true,
        "slug": name,
        "type": "NORMAL"
    })
}

fn git_ref(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "displayId": id.trim_start_matches("refs/heads/"),
        "latestCommit": "16fb16e8afbe6c4087d39feddd68bdc881e302a2",
        "repository": {
            "slug": "repo",
            "id": 1,
            "name": "repo",
            "project": {"key": "PROJ", "id": 1, "name": "Project", "public": false},
            "public": false
        }
    })
}

// ============================================================================
// Pull requests
// ============================================================================

#[test]
fn test_pull_request_decodes() {
    let body = json!({
        "id": 2,
        "version": 4,
        "title": "Add feature",
        "description": "Does things",
        "state": "MERGED",
        "open": false,
        "closed": true,
        "createdDate": 1_435_255_579_000_i64,
        "updatedDate": 1_435_255_600_000_i64,
        "closedDate": 1_435_259_179_000_i64,
        "fromRef": git_ref("refs/heads/feature"),
        "toRef": git_ref("refs/heads/master"),
        "locked": false,
        "author": {"user": user("joe"), "role": "AUTHOR", "approved": false},
        "reviewers": [
            {"user": user("jane"), "role": "REVIEWER", "approved": true, "status": "APPROVED"},
            {"user": user("bob"), "role": "REVIEWER", "approved": false, "status": "NEEDS_WORK"}
        ],
        "participants": [],
        "links": {"self": [{"href": "https://stash.example.com/pr/2"}]}
    });

    let pr: PullRequest = serde_json::from_value(body).unwrap();
    assert_eq!(pr.id, 2);
    assert_eq!(pr.state, PullRequestState::Merged);
    assert_eq!(
        pr.created_date,
        Utc.with_ymd_and_hms(2015, 6, 25, 18, 6, 19).unwrap()
    );
    assert_eq!(pr.from_ref.display_id.as_deref(), Some("feature"));
    assert_eq!(
        pr.to_ref.repository.as_ref().unwrap().project.key,
        "PROJ"
    );
    assert_eq!(pr.author.user.name, "joe");
    assert_eq!(pr.author.user.label(), "JOE");
    assert_eq!(pr.approvals(), 1);
    assert_eq!(pr.time_to_close(), Some(chrono::Duration::hours(1)));
}

#[test]
fn test_pull_request_minimal() {
    let body = json!({
        "id": 9,
        "title": "t",
        "state": "OPEN",
        "createdDate": 0,
        "fromRef": {"id": "refs/heads/a"},
        "toRef": {"id": "refs/heads/b"},
        "author": {"user": {"name": "joe"}}
    });

    let pr: PullRequest = serde_json::from_value(body).unwrap();
    assert!(pr.description.is_none());
    assert!(pr.updated_date.is_none());
    assert!(pr.reviewers.is_empty());
    assert_eq!(pr.time_to_close(), None);
    assert_eq!(pr.author.user.label(), "joe");
}

// ============================================================================
// Activity and comments
// ============================================================================

#[test]
fn test_activity_with_comment_tree() {
    let body = json!({
        "id": 38469,
        "createdDate": 1_435_255_579_000_i64,
        "user": user("joe"),
        "action": "COMMENTED",
        "commentAction": "ADDED",
        "comment": {
            "id": 1,
            "version": 0,
            "text": "I'm a comment!",
            "author": user("joe"),
            "createdDate": 1_435_255_579_000_i64,
            "updatedDate": 1_435_255_579_000_i64,
            "comments": [
                {
                    "id": 2,
                    "text": "I'm a reply",
                    "author": user("jane"),
                    "createdDate": 1_435_255_600_000_i64,
                    "comments": [
                        {
                            "id": 4,
                            "text": "nested",
                            "author": user("joe"),
                            "createdDate": 1_435_255_700_000_i64
                        }
                    ]
                },
                {
                    "id": 3,
                    "text": "second reply",
                    "author": user("bob"),
                    "createdDate": 1_435_255_650_000_i64,
                    "comments": []
                }
            ],
            "permittedOperations": {"editable": true}
        },
        "commentAnchor": {"line": 3}
    });

    let activity: Activity = serde_json::from_value(body).unwrap();
    assert_eq!(activity.action, ActivityAction::Commented);
    assert_eq!(activity.comment_action.as_deref(), Some("ADDED"));

    let comment = activity.comment.unwrap();
    assert_eq!(comment.text, "I'm a comment!");
    assert_eq!(comment.comments[0].author.name, "jane");
    assert_eq!(comment.comments[0].text, "I'm a reply");

    let order: Vec<u64> = comment.thread().map(|c| c.id).collect();
    assert_eq!(order, vec![1, 2, 4, 3]);
    assert_eq!(comment.reply_count(), 3);
}

#[test]
fn test_activity_action_unknown_value_is_kept() {
    let action: ActivityAction = serde_json::from_str("\"AUTO_MERGE_REQUESTED\"").unwrap();
    assert_eq!(
        action,
        ActivityAction::Other("AUTO_MERGE_REQUESTED".to_string())
    );
    assert_eq!(action.to_string(), "AUTO_MERGE_REQUESTED");
    assert_eq!(
        serde_json::to_string(&action).unwrap(),
        "\"AUTO_MERGE_REQUESTED\""
    );
}

#[test]
fn test_activity_action_known_values() {
    for (wire, action) in [
        ("OPENED", ActivityAction::Opened),
        ("APPROVED", ActivityAction::Approved),
        ("RESCOPED", ActivityAction::Rescoped),
        ("MERGED", ActivityAction::Merged),
    ] {
        assert_eq!(ActivityAction::from(wire.to_string()), action);
        assert_eq!(action.as_str(), wire);
    }
}

#[test]
fn test_rescoped_activity_carries_commits() {
    let body = json!({
        "id": 5,
        "createdDate": 0,
        "user": user("joe"),
        "action": "RESCOPED",
        "addedCommits": [{"id": "abc", "author": {"name": "Joe"}, "message": "fix"}],
        "removedCommits": []
    });

    let activity: Activity = serde_json::from_value(body).unwrap();
    assert_eq!(activity.added_commits.len(), 1);
    assert!(activity.comment.is_none());
}

// ============================================================================
// Commits
// ============================================================================

#[test]
fn test_commit_decodes() {
    let body = json!({
        "id": "commit id 1",
        "displayId": "commit",
        "author": {"name": "Joe", "emailAddress": "joe@example.com"},
        "authorTimestamp": 1_435_255_579_000_i64,
        "message": "Fix the thing\n\nLonger explanation",
        "parents": [{"id": "p1", "displayId": "p1"}, {"id": "p2"}],
        "attributes": {}
    });

    let commit: Commit = serde_json::from_value(body).unwrap();
    assert_eq!(commit.id, "commit id 1");
    assert_eq!(commit.author.name, "Joe");
    assert_eq!(commit.summary(), "Fix the thing");
    assert!(commit.is_merge());
    assert!(commit.author_timestamp.is_some());
}

// ============================================================================
// Diffs
// ============================================================================

#[test]
fn test_diff_decodes() {
    let body = json!({
        "fromHash": "16fb16e8afbe6c4087d39feddd68bdc881e302a2",
        "toHash": "1830d0529a30d3d7253935d918ee0e34e7680c64",
        "contextLines": 0,
        "whitespace": "IGNORE_ALL",
        "diffs": [
            {
                "source": {
                    "components": ["src", "a.rs"],
                    "parent": "src",
                    "name": "a.rs",
                    "extension": "rs",
                    "toString": "src/a.rs"
                },
                "destination": {
                    "components": ["src", "a.rs"],
                    "parent": "src",
                    "name": "a.rs",
                    "extension": "rs",
                    "toString": "src/a.rs"
                },
                "hunks": [{
                    "sourceLine": 10,
                    "sourceSpan": 2,
                    "destinationLine": 10,
                    "destinationSpan": 1,
                    "segments": [
                        {"type": "REMOVED", "lines": [
                            {"source": 10, "destination": 10, "line": "old 1", "truncated": false},
                            {"source": 11, "destination": 10, "line": "old 2", "truncated": false}
                        ], "truncated": false},
                        {"type": "ADDED", "lines": [
                            {"source": 12, "destination": 10, "line": "new", "truncated": false}
                        ], "truncated": false}
                    ],
                    "truncated": false
                }],
                "truncated": false
            },
            {
                "source": null,
                "destination": {
                    "components": ["Tests", "New.swift"],
                    "parent": "Tests",
                    "name": "New.swift",
                    "extension": "swift",
                    "toString": "Tests/New.swift"
                },
                "hunks": [{
                    "sourceLine": 0,
                    "sourceSpan": 0,
                    "destinationLine": 1,
                    "destinationSpan": 46,
                    "segments": []
                }],
                "truncated": false
            }
        ],
        "truncated": false
    });

    let diff: DiffResponse = serde_json::from_value(body).unwrap();
    assert_eq!(diff.files_changed(), 2);
    assert_eq!(diff.lines_added(), 1);
    assert_eq!(diff.lines_removed(), 2);

    let added = &diff.diffs[1];
    assert!(added.is_added());
    assert!(!added.is_deleted());
    assert_eq!(added.path().unwrap().full_path, "Tests/New.swift");
    assert_eq!(added.hunks[0].destination_span, 46);
}

#[test]
fn test_deleted_file_path_falls_back_to_source() {
    let diff: Diff = serde_json::from_value(json!({
        "source": {"toString": "gone.txt", "name": "gone.txt"},
        "destination": null
    }))
    .unwrap();

    assert!(diff.is_deleted());
    assert_eq!(diff.path().unwrap().full_path, "gone.txt");
    assert_eq!(diff.lines_added(), 0);
}

// ============================================================================
// New pull request body
// ============================================================================

#[test]
fn test_new_pull_request_body_field_order() {
    let repo = crate::types::RepoRef::new("proj", "repo");
    let body = NewPullRequest::new(
        &repo,
        "Sweet new feature",
        "This feature is the best",
        "refs/heads/new-feature",
        "refs/heads/master",
    )
    .to_body()
    .unwrap();

    pretty_assertions::assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"title":"Sweet new feature","description":"This feature is the best","fromRef":{"id":"refs/heads/new-feature","repo":{"project":{"key":"proj"},"slug":"repo"}},"toRef":{"id":"refs/heads/master","repo":{"project":{"key":"proj"},"slug":"repo"}}}"#
    );
}

#[test]
fn test_new_pull_request_from_fork() {
    let upstream = crate::types::RepoRef::new("PROJ", "repo");
    let fork = crate::types::RepoRef::new("~JOE", "repo");
    let pr = NewPullRequest::new(&upstream, "t", "d", "refs/heads/a", "refs/heads/master")
        .from_repo(&fork);

    assert_eq!(pr.from_ref.repo.project.key, "~JOE");
    assert_eq!(pr.to_ref.repo.project.key, "PROJ");
}

use crate::types::RepoRef;
use serde::Serialize;

/// Body of a create-pull-request call
///
/// Serializes with fields in declaration order, which is the order the server
/// documents: `title`, `description`, `fromRef`, `toRef`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPullRequest {
    pub title: String,
    pub description: String,
    pub from_ref: RefSpec,
    pub to_ref: RefSpec,
}

impl NewPullRequest {
    /// A pull request between two branches of the same repository
    pub fn new(
        repo: &RepoRef,
        title: impl Into<String>,
        description: impl Into<String>,
        from_id: impl Into<String>,
        to_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            from_ref: RefSpec::new(from_id, repo),
            to_ref: RefSpec::new(to_id, repo),
        }
    }

    /// Take the source branch from another repository (a fork)
    #[must_use]
    pub fn from_repo(mut self, repo: &RepoRef) -> Self {
        self.from_ref.repo = RepoSpec::from(repo);
        self
    }

    /// The JSON body, fields in declaration order
    pub fn to_body(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// A ref named by id within a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefSpec {
    pub id: String,
    pub repo: RepoSpec,
}

impl RefSpec {
    pub fn new(id: impl Into<String>, repo: &RepoRef) -> Self {
        Self {
            id: id.into(),
            repo: RepoSpec::from(repo),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSpec {
    pub project: ProjectSpec,
    pub slug: String,
}

impl From<&RepoRef> for RepoSpec {
    fn from(repo: &RepoRef) -> Self {
        Self {
            project: ProjectSpec {
                key: repo.project_key.clone(),
            },
            slug: repo.repo_slug.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    pub key: String,
}

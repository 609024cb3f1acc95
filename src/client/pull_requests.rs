//! Pull-request operations

use crate::config::ClientConfig;
use crate::decode::{CompletionHandler, SingleValue};
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Activity, Commit, DiffResponse, NewPullRequest, PullRequest};
use crate::pagination::{Page, PaginationConfig, Paginator};
use crate::sequence::Sequence;
use crate::types::{DiffOptions, Order, PullRequestState, RepoRef};
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

/// Client for the pull-request endpoints of one server
///
/// Cloning is cheap and clones share the connection pool. Every operation
/// spawns its request chain on the tokio runtime, so operations must be called
/// from within one. Failures to build a request (a bad URL, an unserializable
/// body) surface as a sequence that has already failed.
#[derive(Debug, Clone)]
pub struct PullRequestClient {
    http: HttpClient,
    paginator: Paginator,
}

impl PullRequestClient {
    /// Create a client over a configured HTTP client
    pub fn new(http: HttpClient, pagination: PaginationConfig) -> Self {
        let paginator = Paginator::new(http.clone(), pagination);
        Self { http, paginator }
    }

    /// Build the client, transport and authenticator from a config
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.http_config())?
            .with_authenticator(config.auth().build()?);
        info!("Created client for {}", http.base_url());
        Ok(Self::new(http, config.pagination()))
    }

    /// Get the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Get the pagination limits
    pub fn pagination(&self) -> &PaginationConfig {
        self.paginator.config()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Pull requests in `state`, in `order`, page by page
    pub fn list_pull_requests(
        &self,
        repo: &RepoRef,
        state: PullRequestState,
        order: Order,
    ) -> Sequence<Page<PullRequest>> {
        debug!(
            "Listing {} pull requests in {repo}, {} first",
            state.as_str(),
            order.as_str()
        );
        let url = self.endpoint(repo, &[]).map(|mut url| {
            url.query_pairs_mut()
                .append_pair("state", state.as_str())
                .append_pair("order", order.as_str());
            url
        });
        self.paged(url)
    }

    /// A single pull request
    pub fn get_pull_request(&self, repo: &RepoRef, id: u64) -> Sequence<PullRequest> {
        debug!("Fetching pull request {repo}#{id}");
        let url = self.endpoint(repo, &[id.to_string().as_str()]);
        self.single(Method::GET, url, None)
    }

    /// Activity feed of a pull request, in server order
    pub fn list_activities(&self, repo: &RepoRef, id: u64) -> Sequence<Page<Activity>> {
        debug!("Listing activities of {repo}#{id}");
        let id = id.to_string();
        self.paged(self.endpoint(repo, &[id.as_str(), "activities"]))
    }

    /// Commits of a pull request
    pub fn list_commits(&self, repo: &RepoRef, id: u64) -> Sequence<Page<Commit>> {
        debug!("Listing commits of {repo}#{id}");
        let id = id.to_string();
        self.paged(self.endpoint(repo, &[id.as_str(), "commits"]))
    }

    /// Diff of a pull request
    pub fn get_diff(&self, repo: &RepoRef, id: u64, options: DiffOptions) -> Sequence<DiffResponse> {
        debug!("Fetching diff of {repo}#{id} with {options:?}");
        let id = id.to_string();
        let url = self.endpoint(repo, &[id.as_str(), "diff"]).map(|mut url| {
            url.query_pairs_mut()
                .append_pair("contextLines", &options.context_lines.to_string())
                .append_pair("whitespace", options.whitespace.as_str())
                .append_pair("withComments", options.comments.as_str());
            url
        });
        self.single(Method::GET, url, None)
    }

    /// Open a pull request between two branches of `repo`
    pub fn create_pull_request(
        &self,
        repo: &RepoRef,
        title: &str,
        description: &str,
        from_id: &str,
        to_id: &str,
    ) -> Sequence<PullRequest> {
        let request = NewPullRequest::new(repo, title, description, from_id, to_id);
        self.submit_pull_request(&request)
    }

    /// Open a pull request from a prepared body
    ///
    /// The request goes to the repository of the destination ref.
    pub fn submit_pull_request(&self, request: &NewPullRequest) -> Sequence<PullRequest> {
        let target = &request.to_ref.repo;
        let repo = RepoRef::new(&target.project.key, &target.slug);
        info!(
            "Creating pull request in {repo}: {} -> {}",
            request.from_ref.id, request.to_ref.id
        );

        let body = match request.to_body() {
            Ok(body) => Bytes::from(body),
            Err(e) => return Sequence::failed(e.into()),
        };
        self.single(Method::POST, self.endpoint(&repo, &[]), Some(body))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// `.../projects/{key}/repos/{slug}/pull-requests/{tail...}`
    fn endpoint(&self, repo: &RepoRef, tail: &[&str]) -> Result<Url> {
        let mut segments = vec![
            "projects",
            repo.project_key.as_str(),
            "repos",
            repo.repo_slug.as_str(),
            "pull-requests",
        ];
        segments.extend_from_slice(tail);
        self.http.endpoint(&segments)
    }

    fn paged<T>(&self, url: Result<Url>) -> Sequence<Page<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        match url {
            Ok(url) => self.paginator.pages(url),
            Err(e) => Sequence::failed(e),
        }
    }

    fn single<T>(&self, method: Method, url: Result<Url>, body: Option<Bytes>) -> Sequence<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = match url {
            Ok(url) => url,
            Err(e) => return Sequence::failed(e),
        };
        let http = self.http.clone();
        Sequence::from_future(async move {
            let handler = CompletionHandler::new(SingleValue::<T>::new());
            handler.handle(http.execute(method, url, body).await)
        })
    }
}

//! Pull-request client
//!
//! Domain operations over the REST API. Each call builds its endpoint URL,
//! attaches authentication and returns a [`Sequence`](crate::Sequence):
//! a sequence of pages for listings, a single-value sequence otherwise.
//!
//! ```rust,ignore
//! use stashpull::{ClientConfig, Order, PullRequestClient, PullRequestState, RepoRef};
//!
//! let client = PullRequestClient::from_config(&ClientConfig::from_file("stash.yaml")?)?;
//! let repo = RepoRef::new("PROJ", "repo");
//!
//! let open = client
//!     .list_pull_requests(&repo, PullRequestState::Open, Order::Newest)
//!     .collect_values()
//!     .await?;
//! ```

mod pull_requests;

pub use pull_requests::PullRequestClient;

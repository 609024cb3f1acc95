// Pedantic lints that add noise without catching bugs here
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # stashpull
//!
//! An asynchronous client for the pull-request REST API of Bitbucket Server
//! (formerly Stash).
//!
//! ## Features
//!
//! - **Pull requests**: list by state and order, fetch one, create one
//! - **Review data**: activity feeds with comment threads, commits, diffs
//! - **Paging**: listings follow `nextPageStart` until the server reports the last page
//! - **Replayable results**: every call returns a [`Sequence`] that any number
//!   of observers can read from the start, even after it finished
//! - **Bounded work**: page limits, deadlines and explicit cancellation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stashpull::{ClientConfig, Order, PullRequestClient, PullRequestState, RepoRef, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_file("stash.yaml")?;
//!     let client = PullRequestClient::from_config(&config)?;
//!     let repo = RepoRef::new("PROJ", "repo");
//!
//!     let pages = client.list_pull_requests(&repo, PullRequestState::All, Order::Newest);
//!     let mut observer = pages.observe();
//!     while let Some(page) = observer.next().await {
//!         for pr in page?.values {
//!             println!("#{} {}", pr.id, pr.title);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     PullRequestClient                         │
//! │  list_pull_requests  get_pull_request  list_activities        │
//! │  list_commits        get_diff          create_pull_request    │
//! └───────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬───────────┬─────┴──────┬─────────────┬────────────┐
//! │   Auth    │   HTTP    │  Paginate  │   Decode    │  Sequence  │
//! ├───────────┼───────────┼────────────┼─────────────┼────────────┤
//! │ None      │ Transport │ start/next │ Single      │ Replay log │
//! │ Basic     │ Endpoints │ Page bound │ Paged       │ Cancel     │
//! │ Bearer    │ Headers   │ Deadline   │ Bad status  │ Deadline   │
//! └───────────┴───────────┴────────────┴─────────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Request context and query parameters
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client and transport
pub mod http;

/// Response decoding and completion handling
pub mod decode;

/// Replayable asynchronous sequences
pub mod sequence;

/// Paged responses and the page-following loop
pub mod pagination;

/// Domain entities
pub mod models;

/// Pull-request client
pub mod client;

/// Client configuration
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use auth::{AuthConfig, Authenticator, BasicAuth, BearerAuth, NoAuth};
pub use client::PullRequestClient;
pub use config::ClientConfig;
pub use pagination::{Page, PaginationConfig};
pub use sequence::{Observer, Sequence};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

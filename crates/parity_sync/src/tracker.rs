//! Issue tracker interface and GitHub implementation.
//!
//! The tracker is an external collaborator; the audit only needs to list
//! open issues under its label, create issues, edit bodies, and close with
//! a reason. The GitHub implementation covers exactly that slice of the
//! REST issues API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{SyncError, SyncResult};
use crate::plan::TrackedIssue;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("parity-audit/", env!("CARGO_PKG_VERSION"));
const PAGE_SIZE: usize = 100;

/// Why an issue is being closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    NotPlanned,
    Completed,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseReason::NotPlanned => "not_planned",
            CloseReason::Completed => "completed",
        }
    }
}

/// Minimal read/write surface of the issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// List open issues carrying `label`.
    async fn list_open_issues(&self, label: &str) -> SyncResult<Vec<TrackedIssue>>;

    /// Create an issue with `label` applied.
    async fn create_issue(&self, title: &str, body: &str, label: &str) -> SyncResult<()>;

    /// Close an issue with the given state reason.
    async fn close_issue(&self, number: u64, reason: CloseReason) -> SyncResult<()>;

    /// Replace an issue's body.
    async fn update_body(&self, number: u64, body: &str) -> SyncResult<()>;
}

/// GitHub REST implementation of [`IssueTracker`].
pub struct GitHubTracker {
    http: reqwest::Client,
    base_url: String,
    repo: String,
    token: String,
}

impl GitHubTracker {
    /// `repo` is the `owner/name` slug; the token comes from the
    /// environment via the CLI.
    pub fn new(repo: impl Into<String>, token: impl Into<String>) -> SyncResult<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_API_URL.to_string(),
            repo: repo.into(),
            token: token.into(),
        })
    }

    /// Point the tracker at a different API endpoint (GitHub Enterprise,
    /// test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn issues_url(&self) -> String {
        format!("{}/repos/{}/issues", self.base_url, self.repo)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
    }

    async fn check_status(url: &str, resp: reqwest::Response) -> SyncResult<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp)
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn list_open_issues(&self, label: &str) -> SyncResult<Vec<TrackedIssue>> {
        let url = self.issues_url();
        let mut issues = Vec::new();
        let mut page = 1u32;

        loop {
            debug!("GET {} (page {})", url, page);
            let per_page = PAGE_SIZE.to_string();
            let page_number = page.to_string();
            let resp = self
                .request(reqwest::Method::GET, &url)
                .query(&[
                    ("state", "open"),
                    ("labels", label),
                    ("per_page", per_page.as_str()),
                    ("page", page_number.as_str()),
                ])
                .send()
                .await?;
            let resp = Self::check_status(&url, resp).await?;

            let body = resp.text().await?;
            let batch: Vec<IssueDoc> =
                serde_json::from_str(&body).map_err(|e| SyncError::MalformedResponse {
                    url: url.clone(),
                    message: e.to_string(),
                })?;

            let batch_len = batch.len();
            issues.extend(batch.into_iter().filter_map(IssueDoc::into_issue));

            if batch_len < PAGE_SIZE {
                return Ok(issues);
            }
            page += 1;
        }
    }

    async fn create_issue(&self, title: &str, body: &str, label: &str) -> SyncResult<()> {
        let url = self.issues_url();
        let resp = self
            .request(reqwest::Method::POST, &url)
            .json(&json!({
                "title": title,
                "body": body,
                "labels": [label],
            }))
            .send()
            .await?;
        Self::check_status(&url, resp).await?;
        Ok(())
    }

    async fn close_issue(&self, number: u64, reason: CloseReason) -> SyncResult<()> {
        let url = format!("{}/{}", self.issues_url(), number);
        let resp = self
            .request(reqwest::Method::PATCH, &url)
            .json(&json!({
                "state": "closed",
                "state_reason": reason.as_str(),
            }))
            .send()
            .await?;
        Self::check_status(&url, resp).await?;
        Ok(())
    }

    async fn update_body(&self, number: u64, body: &str) -> SyncResult<()> {
        let url = format!("{}/{}", self.issues_url(), number);
        let resp = self
            .request(reqwest::Method::PATCH, &url)
            .json(&json!({ "body": body }))
            .send()
            .await?;
        Self::check_status(&url, resp).await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct IssueDoc {
    number: u64,
    title: String,
    /// Present when the "issue" is actually a pull request; the issues
    /// endpoint returns both.
    pull_request: Option<serde_json::Value>,
}

impl IssueDoc {
    fn into_issue(self) -> Option<TrackedIssue> {
        if self.pull_request.is_some() {
            return None;
        }
        Some(TrackedIssue {
            number: self.number,
            title: self.title,
        })
    }
}

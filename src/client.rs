//! HTTP client for the funding site's JSON POST API.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::{Origin, Url};

use crate::{
    navigate::{Navigator, TracingNavigator},
    types::{MarkdownToHtml, ProposalUpsert, ProposalUrl, RenderedMarkdown, Reply, Submission},
    Error,
};

/// HTTP client for the funding site's JSON POST API.
///
/// Submissions stay on the client's origin: endpoint paths are resolved
/// against the base URL, ambient session cookies attach automatically, and
/// redirects are only followed within the origin. Each reply is normalized
/// into a success value, a navigation hand-off, or a typed error.
pub struct Client {
    /// Origin the client talks to, e.g. `https://funding.example.org`.
    base_url: Url,
    http: reqwest::Client,
    navigator: Arc<dyn Navigator>,
}

impl Client {
    /// Creates a client for the given origin with the default logging
    /// navigator.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_navigator(base_url, Arc::new(TracingNavigator))
    }

    /// Creates a client with a custom [`Navigator`] to receive redirect
    /// hand-offs.
    pub fn with_navigator(base_url: &str, navigator: Arc<dyn Navigator>) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(same_origin_redirects(base_url.origin()))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            base_url,
            http,
            navigator,
        })
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let url = self.base_url.join(path).map_err(|e| {
            tracing::error!("Invalid endpoint URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        if url.origin() != self.base_url.origin() {
            return Err(Error::CrossOrigin { url });
        }
        Ok(url)
    }

    /// Submits `payload` as a JSON POST to `path` and normalizes the reply.
    ///
    /// A success body resolves to [`Submission::Data`]. A redirect is handed
    /// to the navigator and resolves to [`Submission::Navigated`] without
    /// reading the body. A reply carrying an `error` or `errors` field fails
    /// with [`Error::Api`] or [`Error::Validation`] respectively, and a
    /// non-JSON reply fails with [`Error::UnexpectedContentType`] whatever
    /// its status code. Nothing is retried and no timeout is imposed;
    /// callers that want one race the returned future against a timer.
    pub async fn submit<P>(&self, path: &str, payload: &P) -> Result<Submission, Error>
    where
        P: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path)?;
        let body = serde_json::to_string(payload).map_err(|e| {
            tracing::error!("Failed to encode request body: {}", e);
            Error::Serialize(e)
        })?;

        let resp = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to submit to {}: {}", url, e);
                Error::Transport(e)
            })?;

        if resp.url() != &url {
            let target = resp.url().clone();
            self.navigator.navigate(&target);
            return Ok(Submission::Navigated(target));
        }

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        // Exact match, like the page script this replaces; a parameterized
        // `application/json; charset=utf-8` does not pass.
        if content_type.as_deref() != Some("application/json") {
            let body = resp.text().await.map_err(Error::Transport)?;
            let snippet = truncate_body(&body);
            tracing::error!(
                "Expected application/json from {} but got {:?} (status {}): {}",
                url,
                content_type,
                status,
                snippet
            );
            return Err(Error::UnexpectedContentType {
                status: status.as_u16(),
                content_type,
                body: snippet,
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        match Reply::decode(&body)? {
            Reply::Success(value) => Ok(Submission::Data(value)),
            Reply::Failure(value) => Err(Error::Api(value)),
            Reply::Invalid(fields) => Err(Error::Validation(
                fields.iter().map(ToString::to_string).collect(),
            )),
        }
    }

    async fn post<T, P>(&self, path: &str, payload: &P) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        match self.submit(path, payload).await? {
            Submission::Data(value) => serde_json::from_value(value).map_err(|e| {
                tracing::error!("Unexpected reply shape from {}: {}", path, e);
                Error::UnexpectedShape(e)
            }),
            Submission::Navigated(url) => Err(Error::Redirected { url }),
        }
    }

    /// Creates a new proposal, or edits an existing one when `slug` is set.
    /// Resolves with the proposal's viewing URL.
    pub async fn upsert_proposal(&self, proposal: &ProposalUpsert) -> Result<ProposalUrl, Error> {
        self.post("/api/proposals/upsert", proposal).await
    }

    /// Renders proposal markdown to HTML server-side, as used for live
    /// previews while editing.
    pub async fn markdown_to_html(&self, markdown: &str) -> Result<RenderedMarkdown, Error> {
        let payload = MarkdownToHtml {
            markdown: markdown.to_owned(),
        };
        self.post("/lib/markdown/html", &payload).await
    }
}

/// Follows redirects within `origin` only; leaving it is a transport
/// error, matching same-origin fetch semantics.
fn same_origin_redirects(origin: Origin) -> redirect::Policy {
    redirect::Policy::custom(move |attempt| {
        if attempt.previous().len() > 10 {
            attempt.error("too many redirects")
        } else if attempt.url().origin() == origin {
            attempt.follow()
        } else {
            attempt.error("cross-origin redirect refused")
        }
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}

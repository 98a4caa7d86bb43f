//! Error types for the API client.

use url::Url;

/// Errors that can occur when submitting a request to the funding site.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request payload could not be encoded as JSON. Raised before any
    /// network activity.
    #[error("failed to encode request body as JSON")]
    Serialize(#[source] serde_json::Error),

    /// The endpoint path did not resolve to a valid URL.
    #[error("invalid endpoint URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The endpoint path resolved outside the client's origin. The client
    /// never issues cross-origin requests.
    #[error("refusing cross-origin request to {url}")]
    CrossOrigin { url: Url },

    /// The underlying HTTP request failed (connection, TLS, or a refused
    /// cross-origin redirect). Propagated unchanged.
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    /// The server replied with something other than `application/json`.
    /// Carries the status and a body snippet for diagnosis.
    #[error("expected an application/json response, got {content_type:?} (status {status})")]
    UnexpectedContentType {
        status: u16,
        content_type: Option<String>,
        body: String,
    },

    /// The response claimed to be JSON but did not parse. Also covers the
    /// nested validation-error string inside an `errors` reply.
    #[error("response body is not valid JSON")]
    MalformedJson(#[source] serde_json::Error),

    /// The success body did not match the shape a typed operation expected.
    #[error("response JSON did not match the expected shape")]
    UnexpectedShape(#[source] serde_json::Error),

    /// The server reported an application error via the `error` field.
    #[error("server reported an error: {0}")]
    Api(serde_json::Value),

    /// The server reported field-level validation errors via the `errors`
    /// field, one `"loc: msg"` entry per field, in server order.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A typed operation was answered with a redirect. The navigator has
    /// already been handed the target URL.
    #[error("redirected to {url}")]
    Redirected { url: Url },
}

//! Navigation hand-off for redirected submissions.

use url::Url;

/// Receives the target URL when the server answers a submission with a
/// redirect. In the browser original this was a `window.location`
/// assignment; native callers decide what "navigate" means for them
/// (open the login page, surface a prompt, or just log it).
pub trait Navigator: Send + Sync {
    /// Called once per redirected submission with the final URL.
    fn navigate(&self, url: &Url);
}

/// Default [`Navigator`] that records the hand-off in the log and nothing
/// else.
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, url: &Url) {
        tracing::info!(%url, "server redirected, navigation handed off");
    }
}

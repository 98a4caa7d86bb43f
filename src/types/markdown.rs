use serde::{Deserialize, Serialize};

/// Request body for the server-side markdown preview endpoint.
#[derive(Serialize, Deserialize)]
pub struct MarkdownToHtml {
    pub markdown: String,
}

/// Rendered HTML returned by the markdown preview endpoint.
#[derive(Serialize, Deserialize)]
pub struct RenderedMarkdown {
    pub html: String,
}

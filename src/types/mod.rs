mod reply;
pub use self::reply::{FieldError, FieldPath, PathSegment, Reply, Submission};

mod proposal;
pub use self::proposal::{ProposalCategory, ProposalStatus, ProposalUpsert, ProposalUrl};

mod markdown;
pub use self::markdown::{MarkdownToHtml, RenderedMarkdown};

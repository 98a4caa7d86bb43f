use serde::{Deserialize, Serialize};

/// Payload for creating or editing a proposal.
#[derive(Serialize, Deserialize, Clone)]
pub struct ProposalUpsert {
    pub title: String,

    /// Set when editing an existing proposal, absent on create.
    pub slug: Option<String>,

    /// Proposal body as markdown.
    pub markdown: String,

    /// Funding target in the site's coin.
    pub funds_target: f64,

    pub category: ProposalCategory,

    /// Only honored for moderators; regular submissions leave it unset.
    pub status: Option<ProposalStatus>,

    pub discourse_topic_id: Option<i64>,

    /// Address that receives the raised funds.
    pub addr_receiving: String,
}

/// Proposal category. Stored and transmitted as an integer code.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(into = "u8", try_from = "u8")]
pub enum ProposalCategory {
    Wallets = 0,
    Marketing = 1,
    Core = 2,
    Misc = 3,
    Design = 4,
}

impl From<ProposalCategory> for u8 {
    fn from(category: ProposalCategory) -> u8 {
        category as u8
    }
}

impl TryFrom<u8> for ProposalCategory {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => ProposalCategory::Wallets,
            1 => ProposalCategory::Marketing,
            2 => ProposalCategory::Core,
            3 => ProposalCategory::Misc,
            4 => ProposalCategory::Design,
            _ => return Err(format!("unknown proposal category {}", code)),
        })
    }
}

impl std::fmt::Display for ProposalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProposalCategory::Wallets => "Wallets",
                ProposalCategory::Marketing => "Marketing",
                ProposalCategory::Core => "Core",
                ProposalCategory::Misc => "Miscellaneous",
                ProposalCategory::Design => "Design",
            }
        )
    }
}

/// Lifecycle state of a proposal. Stored and transmitted as an integer
/// code; `Display` renders the site's labels.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(into = "u8", try_from = "u8")]
pub enum ProposalStatus {
    Disabled = 0,
    Idea = 1,
    FundingRequired = 2,
    Wip = 3,
    Completed = 4,
}

impl From<ProposalStatus> for u8 {
    fn from(status: ProposalStatus) -> u8 {
        status as u8
    }
}

impl TryFrom<u8> for ProposalStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => ProposalStatus::Disabled,
            1 => ProposalStatus::Idea,
            2 => ProposalStatus::FundingRequired,
            3 => ProposalStatus::Wip,
            4 => ProposalStatus::Completed,
            _ => return Err(format!("unknown proposal status {}", code)),
        })
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProposalStatus::Disabled => "Disabled",
                ProposalStatus::Idea => "idea",
                ProposalStatus::FundingRequired => "Funding Required",
                ProposalStatus::Wip => "WIP",
                ProposalStatus::Completed => "Completed",
            }
        )
    }
}

/// Reply to a proposal upsert: where the proposal now lives.
#[derive(Serialize, Deserialize)]
pub struct ProposalUrl {
    pub url: String,
}
